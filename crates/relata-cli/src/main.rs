//! `relata` binary: converts one `.erd` document per invocation.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use relata_cli::{
    Args,
    error_adapter::{Report, print_reports},
};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(input = args.input, format:? = args.format; "Parsed arguments");

    match relata_cli::run(&args) {
        Ok(()) => {
            info!(input = args.input; "Conversion finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_reports(&[Report::from_error(&err)]);
            ExitCode::FAILURE
        }
    }
}

/// Unknown level names fall back to `warn`.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, logging warnings only");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}
