//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create the infra adapters (HTTP client, decryptor, password file)
//! - Inject them into the paste use case through the port traits
//!
//! ## Prohibited
//!
//! - No business logic and no configuration validation. Both belong to
//!   the use case.
//!
//! This is the only place allowed to depend on rc-infra and rc-app at once.

use std::sync::Arc;

use anyhow::Context;
use rc_app::PasteClipboard;
use rc_core::PasteConfig;
use rc_infra::{AesGcmDecryptor, FsPasswordFile, HttpClipboardServer};

pub fn build_paste_use_case(config: PasteConfig) -> anyhow::Result<PasteClipboard> {
    let server =
        HttpClipboardServer::new(config.timeout).context("Failed to create HTTP client")?;

    Ok(PasteClipboard::new(
        config,
        Arc::new(server),
        Arc::new(AesGcmDecryptor::new()),
        Arc::new(FsPasswordFile::new()),
    ))
}
