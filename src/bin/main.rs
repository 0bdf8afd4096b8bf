use std::process::ExitCode;

use clap::Parser;
use lambda_inventory::{cli::Cli, run, ReportOptions};

#[tokio::main]
async fn main() -> ExitCode {
    // an illegal sort key exits here, before any AWS call
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match run(ReportOptions::from(cli)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
