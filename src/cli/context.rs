//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use classpass::pass::Source;
use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use super::{CliFlags, ParseError, help, parse, prompts};
use crate::settings::Settings;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.handle_clipboard()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("classpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        settings.quiet = flags.quiet;
        settings.shuffle = !flags.no_shuffle;
        if let Some(n) = flags.number {
            settings.number_of_passwords = n;
        }

        for (class, chars) in &flags.alphabets {
            *settings.source_mut(*class) = Source::chars(chars);
        }

        if flags.all {
            settings.enable_all();
        }
        // Explicit classes narrow `--all` down to the ones named.
        if !flags.picks.is_empty() {
            settings.only(&flags.picks);
        }
        if !flags.has_class_args() {
            debug!("no classes named, using the default digit password");
        }

        settings.to_clipboard = flags.clipboard;
    }

    fn handle_clipboard(&mut self) -> Result<(), Done> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(e) => {
                debug!("clipboard unavailable: {e}");
                if !prompts::clipboard_fallback_prompt(self.settings.quiet) {
                    return Err(Done);
                }
                self.settings.to_clipboard = false;
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) {
        let mut generator = self.settings.generator();
        let request = self.settings.request();
        let count = self.settings.number_of_passwords;
        debug!("generating {count} password(s)");

        let mut passwords = String::new();
        let mut empty = 0;
        for _ in 0..count {
            let mut pass = generator.generate(request);
            if pass.is_empty() {
                empty += 1;
            }
            passwords.push_str(&pass);
            passwords.push('\n');
            pass.zeroize();
        }
        if empty > 0 {
            prompts::warn(
                self.settings.quiet,
                &format!("Warning: {empty} empty password(s), check class counts and alphabets"),
            );
        }

        match self.clipboard.as_mut() {
            Some(ctx) if self.settings.to_clipboard => {
                match ctx.set_contents(passwords.trim_end().to_string()) {
                    Ok(()) => prompts::clipboard_copied(self.settings.quiet, count),
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
            }
            _ => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                let _ = out.write_all(passwords.as_bytes());
                let _ = out.flush();
            }
        }

        passwords.zeroize();
    }
}
