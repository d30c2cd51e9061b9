//! Command dispatch.

use anyhow::anyhow;
use rc_app::PasteError;
use tracing::info;

use super::config::{load_config, resolve_paste_config, FileConfig, SERVER_ENV};
use super::wiring::build_paste_use_case;
use crate::cli::{Cli, Commands, PasteArgs};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Paste(args) => paste(args, file_config).await,
    }
}

async fn paste(args: PasteArgs, file_config: FileConfig) -> anyhow::Result<()> {
    let config = resolve_paste_config(args, file_config)?;
    let use_case = build_paste_use_case(config)?;
    let mut stdout = tokio::io::stdout();

    match use_case.execute(&mut stdout).await {
        Ok(report) => {
            info!(
                bytes = report.bytes_written,
                decrypted = report.decrypted,
                "paste finished"
            );
            Ok(())
        }
        Err(PasteError::MissingServerAddress) => Err(anyhow!(
            "put the clipboard server's address into the {SERVER_ENV} environment variable, --server or the config file"
        )),
        Err(err) => Err(err.into()),
    }
}
