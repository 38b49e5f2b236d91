use std::{env, panic, process};

use env_logger::Env;

mod cli;
mod exits;
mod settings;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let status = panic::catch_unwind(|| cli::run(args)).unwrap_or(1);
    process::exit(status);
}
