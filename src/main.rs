use std::process::ExitCode;

use clap::Parser;
use rclip_lib::bootstrap::{init_tracing_subscriber, run};
use rclip_lib::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber(cli.verbose) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
