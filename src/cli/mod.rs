mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Parse `args` and run. Returns the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'classpass --help' for more information.");
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Done) => 0,
    }
}
