use classpass::pass::{Class, Pick};

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub all: bool,
    pub no_shuffle: bool,
    pub number: Option<usize>,
    /// Classes named on the command line, in the order given.
    pub picks: Vec<(Class, Pick)>,
    pub alphabets: Vec<(Class, String)>,
}

impl CliFlags {
    /// True when the user chose which classes to draw from.
    pub fn has_class_args(&self) -> bool {
        self.all || !self.picks.is_empty()
    }
}
