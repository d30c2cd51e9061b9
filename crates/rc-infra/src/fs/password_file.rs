use std::path::Path;

use async_trait::async_trait;
use rc_core::ports::{PasswordFileError, PasswordFilePort};
use rc_core::Passphrase;
use tracing::debug;

/// Reads the encryption password from a file on disk.
///
/// Trailing line breaks are dropped so files written with `echo` work.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPasswordFile;

impl FsPasswordFile {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordFilePort for FsPasswordFile {
    async fn read_password(&self, path: &Path) -> Result<Passphrase, PasswordFileError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| PasswordFileError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let content = String::from_utf8(bytes).map_err(|_| PasswordFileError::NotUtf8 {
            path: path.to_path_buf(),
        })?;

        debug!(path = %path.display(), "Loaded password file");
        Ok(Passphrase::new(content.trim_end_matches(['\r', '\n'])))
    }
}
