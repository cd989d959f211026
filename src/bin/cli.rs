// src/bin/cli.rs
use std::process::ExitCode;

use color_eyre::eyre::Report;
use price_watch::cli;

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: {e}");
    }

    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            eprintln!("ERROR: {:?}", Report::new(e));
            ExitCode::from(code)
        }
    }
}
