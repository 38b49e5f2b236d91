//! Password generation.

mod bounds;
pub mod charset;
mod generate;

pub use bounds::Bounds;
pub use charset::{
    Class, ClassDefaults, Source, default_lowercase, default_number, default_special,
    default_uppercase,
};
pub use generate::{GeneratorConfig, PasswordGenerator, Pick, Request};
