mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = config::load(&cli)?;
    let rendered = commands::run(&cli, &config).await?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;

    Ok(ExitCode::SUCCESS)
}
