use classpass::pass::{Class, Pick};
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid count, expected N or MIN:MAX: {0}")]
    InvalidCount(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-a" | "--all" => flags.all = true,
            "--no-shuffle" => flags.no_shuffle = true,
            "-n" | "--number" => {
                let value = value_for(args, &mut i)?;
                flags.number = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.to_string()))?,
                );
            }
            "-U" | "--upper" | "-L" | "--lower" | "-D" | "--digits" | "-S" | "--special" => {
                let class = class_flag(arg);
                // Count is optional: only consume the next arg if it isn't a flag.
                let pick = if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    parse_count(&args[i])?
                } else {
                    Pick::Enabled
                };
                flags.picks.push((class, pick));
            }
            "--upper-chars" | "--lower-chars" | "--digit-chars" | "--special-chars" => {
                let class = class_flag(arg);
                let value = value_for(args, &mut i)?;
                flags.alphabets.push((class, value.to_string()));
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Parse `N` as a fixed count or `MIN:MAX` as a range.
pub fn parse_count(s: &str) -> Result<Pick, ParseError> {
    let invalid = || ParseError::InvalidCount(s.to_string());
    match s.split_once(':') {
        Some((min, max)) => {
            let min = min.trim().parse().map_err(|_| invalid())?;
            let max = max.trim().parse().map_err(|_| invalid())?;
            Ok(Pick::Range(min, max))
        }
        None => s.trim().parse().map(Pick::Count).map_err(|_| invalid()),
    }
}

fn value_for<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn class_flag(arg: &str) -> Class {
    match arg {
        "-U" | "--upper" | "--upper-chars" => Class::Uppercase,
        "-L" | "--lower" | "--lower-chars" => Class::Lowercase,
        "-D" | "--digits" | "--digit-chars" => Class::Number,
        _ => Class::Special,
    }
}
