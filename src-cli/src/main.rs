//! `securevault` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use securevault::cli::Cli;
use securevault::logging;
use securevault_vault::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.data_dir);

    // Dropping the guard flushes buffered log lines, so it lives until exit.
    let _log_guard = logging::init(&settings.log_level, cli.verbose);

    match securevault::run(cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("securevault: {message}");
            ExitCode::FAILURE
        }
    }
}
