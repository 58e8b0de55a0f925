use clap::Parser;
use linetally_cli::args::Args;
use linetally_cli::config::ScanConfig;
use linetally_cli::error::Result;
use linetally_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.logging);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<()> {
    let config = ScanConfig::try_from(args)?;
    log::debug!("{config:?}");

    if args.output.empty_lines {
        let reports = linetally_engine::locate_empty_lines(&config)?;
        presentation::print_empty_lines(&reports)
    } else {
        let summary = linetally_engine::run(&config)?;
        presentation::print_report(&summary, args.output.format)
    }
}
