//! Character classes and their built-in alphabets.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const SPECIAL: &[char] = &[
    '~', '!', '@', '#', '$', '%', '^', '&', '*', '?', '_', '+', '-',
];

/// One of the four character classes, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Uppercase,
    Lowercase,
    Number,
    Special,
}

/// Per-class fallback alphabet and count bounds.
#[derive(Debug)]
pub struct ClassDefaults {
    pub alphabet: fn() -> Vec<char>,
    pub min: i64,
    pub max: i64,
}

static DEFAULTS: [ClassDefaults; 4] = [
    ClassDefaults {
        alphabet: default_uppercase,
        min: 4,
        max: 7,
    },
    ClassDefaults {
        alphabet: default_lowercase,
        min: 4,
        max: 7,
    },
    ClassDefaults {
        alphabet: default_number,
        min: 1,
        max: 5,
    },
    ClassDefaults {
        alphabet: default_special,
        min: 1,
        max: 5,
    },
];

impl Class {
    /// All classes in the fixed order their characters are appended.
    pub const ALL: [Class; 4] = [
        Class::Uppercase,
        Class::Lowercase,
        Class::Number,
        Class::Special,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn defaults(self) -> &'static ClassDefaults {
        &DEFAULTS[self.index()]
    }

    pub fn default_alphabet(self) -> Vec<char> {
        (self.defaults().alphabet)()
    }

    pub fn default_min(self) -> i64 {
        self.defaults().min
    }

    pub fn default_max(self) -> i64 {
        self.defaults().max
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Class::Uppercase => "uppercase",
            Class::Lowercase => "lowercase",
            Class::Number => "number",
            Class::Special => "special",
        };
        f.write_str(name)
    }
}

/// Where a class takes its alphabet from at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// The class never contributes characters.
    Disabled,
    /// The built-in alphabet for the class.
    #[default]
    Default,
    /// A caller-supplied alphabet, used as given (may be empty).
    Explicit(Vec<char>),
}

impl Source {
    /// Explicit alphabet from the characters of `chars`.
    pub fn chars(chars: &str) -> Self {
        Source::Explicit(chars.chars().collect())
    }

    pub(crate) fn resolve(&self, class: Class) -> Option<Vec<char>> {
        match self {
            Source::Disabled => None,
            Source::Default => Some(class.default_alphabet()),
            Source::Explicit(chars) => Some(chars.clone()),
        }
    }
}

impl From<bool> for Source {
    fn from(enabled: bool) -> Self {
        if enabled {
            Source::Default
        } else {
            Source::Disabled
        }
    }
}

impl From<Vec<char>> for Source {
    fn from(chars: Vec<char>) -> Self {
        Source::Explicit(chars)
    }
}

/// `A` through `Z`.
pub fn default_uppercase() -> Vec<char> {
    UPPERCASE.chars().collect()
}

/// `a` through `z`.
pub fn default_lowercase() -> Vec<char> {
    LOWERCASE.chars().collect()
}

/// `0` through `9`.
pub fn default_number() -> Vec<char> {
    DIGITS.to_vec()
}

/// The 13 symbols `~!@#$%^&*?_+-`.
pub fn default_special() -> Vec<char> {
    SPECIAL.to_vec()
}
