// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use version_patch::cli::Args;
use version_patch::config::Config;
use version_patch::{app, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_filter());

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let report = app::run(&config)?;
    presentation::print_report(&report);
    Ok(())
}
