//! Password generation settings.

use classpass::pass::{Class, GeneratorConfig, PasswordGenerator, Pick, Request, Source};

#[derive(Debug, Clone)]
pub struct Settings {
    pub uppercase_chars: Source,
    pub lowercase_chars: Source,
    pub numeric_chars: Source,
    pub special_chars: Source,
    pub uppercase_pick: Pick,
    pub lowercase_pick: Pick,
    pub numeric_pick: Pick,
    pub special_pick: Pick,
    pub shuffle: bool,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn source_mut(&mut self, class: Class) -> &mut Source {
        match class {
            Class::Uppercase => &mut self.uppercase_chars,
            Class::Lowercase => &mut self.lowercase_chars,
            Class::Number => &mut self.numeric_chars,
            Class::Special => &mut self.special_chars,
        }
    }

    pub fn pick_mut(&mut self, class: Class) -> &mut Pick {
        match class {
            Class::Uppercase => &mut self.uppercase_pick,
            Class::Lowercase => &mut self.lowercase_pick,
            Class::Number => &mut self.numeric_pick,
            Class::Special => &mut self.special_pick,
        }
    }

    /// Enable every class with its stored bounds.
    pub fn enable_all(&mut self) {
        for class in Class::ALL {
            *self.pick_mut(class) = Pick::Enabled;
        }
    }

    /// Use only the given classes for generation, each with its pick.
    pub fn only(&mut self, picks: &[(Class, Pick)]) {
        for class in Class::ALL {
            *self.pick_mut(class) = Pick::Disabled;
        }
        for &(class, pick) in picks {
            *self.pick_mut(class) = pick;
        }
    }

    pub fn generator(&self) -> PasswordGenerator {
        GeneratorConfig::new()
            .source(Class::Uppercase, self.uppercase_chars.clone())
            .source(Class::Lowercase, self.lowercase_chars.clone())
            .source(Class::Number, self.numeric_chars.clone())
            .source(Class::Special, self.special_chars.clone())
            .build()
    }

    pub fn request(&self) -> Request {
        Request::default()
            .upper(self.uppercase_pick)
            .lower(self.lowercase_pick)
            .number(self.numeric_pick)
            .special(self.special_pick)
            .shuffle(self.shuffle)
    }
}

impl Default for Settings {
    /// A 4 digit numeric password from an otherwise default generator.
    fn default() -> Self {
        Self {
            uppercase_chars: Source::Default,
            lowercase_chars: Source::Default,
            numeric_chars: Source::Default,
            special_chars: Source::Default,
            uppercase_pick: Pick::Disabled,
            lowercase_pick: Pick::Disabled,
            numeric_pick: Pick::Count(4),
            special_pick: Pick::Disabled,
            shuffle: true,
            number_of_passwords: 1,
            to_clipboard: false,
            quiet: false,
        }
    }
}
