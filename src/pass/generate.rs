//! Password generation.

use log::{debug, trace};
use rand::Rng;
use rand::seq::{SliceRandom, index};
use zeroize::Zeroize;

use super::bounds::Bounds;
use super::charset::{Class, Source};

/// Constructor inputs: an alphabet source and optional bounds for each class.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    sources: [Source; 4],
    mins: [Option<i64>; 4],
    maxs: [Option<i64>; 4],
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, class: Class, source: impl Into<Source>) -> Self {
        self.sources[class.index()] = source.into();
        self
    }

    pub fn min(mut self, class: Class, min: i64) -> Self {
        self.mins[class.index()] = Some(min);
        self
    }

    pub fn max(mut self, class: Class, max: i64) -> Self {
        self.maxs[class.index()] = Some(max);
        self
    }

    pub fn bounds(self, class: Class, min: i64, max: i64) -> Self {
        self.min(class, min).max(class, max)
    }

    pub fn build(self) -> PasswordGenerator {
        PasswordGenerator::from_config(self)
    }
}

/// Per-call selector for one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pick {
    /// Leave the class out of this call.
    Disabled,
    /// Use the class with its stored bounds.
    #[default]
    Enabled,
    /// Draw exactly `n` characters, clamped like any other bound.
    Count(i64),
    /// Re-resolve the stored bounds to `min..=max`.
    Range(i64, i64),
}

impl From<bool> for Pick {
    fn from(enabled: bool) -> Self {
        if enabled { Pick::Enabled } else { Pick::Disabled }
    }
}

impl From<i64> for Pick {
    fn from(n: i64) -> Self {
        Pick::Count(n)
    }
}

impl From<(i64, i64)> for Pick {
    fn from((min, max): (i64, i64)) -> Self {
        Pick::Range(min, max)
    }
}

/// Arguments of a single [`PasswordGenerator::generate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    picks: [Pick; 4],
    shuffle: bool,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            picks: [Pick::Enabled; 4],
            shuffle: true,
        }
    }
}

impl Request {
    pub fn pick(mut self, class: Class, pick: impl Into<Pick>) -> Self {
        self.picks[class.index()] = pick.into();
        self
    }

    pub fn upper(self, pick: impl Into<Pick>) -> Self {
        self.pick(Class::Uppercase, pick)
    }

    pub fn lower(self, pick: impl Into<Pick>) -> Self {
        self.pick(Class::Lowercase, pick)
    }

    pub fn number(self, pick: impl Into<Pick>) -> Self {
        self.pick(Class::Number, pick)
    }

    pub fn special(self, pick: impl Into<Pick>) -> Self {
        self.pick(Class::Special, pick)
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn get(&self, class: Class) -> Pick {
        self.picks[class.index()]
    }
}

#[derive(Debug, Clone)]
struct ClassConfig {
    alphabet: Vec<char>,
    bounds: Bounds,
}

/// Resolved alphabets and bounds for the classes enabled at construction.
///
/// Bounds passed to [`generate`](Self::generate) replace the stored ones and
/// stay in effect for later calls until overridden again. Calls therefore
/// need `&mut self`; wrap the generator in a `Mutex` to share it.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    classes: [Option<ClassConfig>; 4],
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        GeneratorConfig::default().build()
    }
}

impl PasswordGenerator {
    /// Generator with the given alphabet sources and default bounds.
    pub fn new(
        upper: impl Into<Source>,
        lower: impl Into<Source>,
        number: impl Into<Source>,
        special: impl Into<Source>,
    ) -> Self {
        GeneratorConfig::new()
            .source(Class::Uppercase, upper)
            .source(Class::Lowercase, lower)
            .source(Class::Number, number)
            .source(Class::Special, special)
            .build()
    }

    pub fn from_config(config: GeneratorConfig) -> Self {
        let classes = Class::ALL.map(|class| {
            let i = class.index();
            let alphabet = config.sources[i].resolve(class)?;
            let bounds = Bounds::resolve(class, config.mins[i], config.maxs[i], alphabet.len());
            debug!(
                "{class}: {} chars, {}..={}",
                alphabet.len(),
                bounds.min,
                bounds.max
            );
            Some(ClassConfig { alphabet, bounds })
        });
        Self { classes }
    }

    pub fn is_enabled(&self, class: Class) -> bool {
        self.classes[class.index()].is_some()
    }

    /// Current bounds, `None` when the class was disabled at construction.
    pub fn bounds(&self, class: Class) -> Option<Bounds> {
        self.classes[class.index()].as_ref().map(|c| c.bounds)
    }

    pub fn alphabet(&self, class: Class) -> Option<&[char]> {
        self.classes[class.index()]
            .as_ref()
            .map(|c| c.alphabet.as_slice())
    }

    /// Shortest and longest password the stored bounds allow.
    pub fn length_range(&self) -> (usize, usize) {
        self.classes
            .iter()
            .flatten()
            .fold((0, 0), |(lo, hi), c| (lo + c.bounds.min, hi + c.bounds.max))
    }

    /// Generate a password using the thread-local CSPRNG.
    pub fn generate(&mut self, request: Request) -> String {
        self.generate_with(&mut rand::rng(), request)
    }

    /// Generate a password drawing all randomness from `rng`.
    ///
    /// Classes disabled at construction stay disabled whatever the request
    /// says. Characters are appended in class order, each class contributing
    /// distinct alphabet positions in the order they were drawn, and the whole
    /// buffer is shuffled when the request asks for it.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R, request: Request) -> String {
        self.apply(&request);

        let mut chars: Vec<char> = Vec::with_capacity(self.length_range().1);

        for class in Class::ALL {
            if request.get(class) == Pick::Disabled {
                continue;
            }
            let Some(config) = &self.classes[class.index()] else {
                continue;
            };

            let k = rng.random_range(config.bounds.min..=config.bounds.max);
            trace!("{class}: drawing {k}");
            if k == 0 {
                continue;
            }

            let picked = index::sample(rng, config.alphabet.len(), k);
            chars.extend(picked.iter().map(|i| config.alphabet[i]));
        }

        if request.shuffle {
            chars.shuffle(rng);
        }

        let password = chars.iter().collect();
        chars.zeroize();
        password
    }

    /// Store the bound overrides carried by `request`.
    fn apply(&mut self, request: &Request) {
        for class in Class::ALL {
            let Some(config) = self.classes[class.index()].as_mut() else {
                continue;
            };
            let len = config.alphabet.len();
            let bounds = match request.get(class) {
                Pick::Disabled | Pick::Enabled => continue,
                Pick::Count(n) => Bounds::fixed(class, n, len),
                Pick::Range(min, max) => Bounds::resolve(class, Some(min), Some(max), len),
            };
            if bounds != config.bounds {
                debug!("{class}: bounds now {}..={}", bounds.min, bounds.max);
            }
            config.bounds = bounds;
        }
    }
}
