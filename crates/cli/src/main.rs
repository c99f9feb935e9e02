#![warn(clippy::pedantic)]

use std::process::ExitCode;

use log::{LevelFilter, error};

use tread_cli as cli;

fn main() -> ExitCode {
    if let Err(err) = cli::logger::init(LevelFilter::Warn) {
        eprintln!("failed to initialize logger: {err}");
    }

    match cli::run(&cli::packages(), &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
