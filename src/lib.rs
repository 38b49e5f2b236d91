//! Password generation from four independently configured character classes.
//!
//! ```no_run
//! use classpass::pass::{PasswordGenerator, Pick, Request};
//!
//! let mut generator = PasswordGenerator::default();
//! let password = generator.generate(Request::default().number(Pick::Count(3)));
//! println!("{password}");
//! ```

pub mod pass;
