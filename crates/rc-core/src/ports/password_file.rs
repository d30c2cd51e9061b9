use std::path::Path;

use async_trait::async_trait;

use super::errors::PasswordFileError;
use crate::security::Passphrase;

#[async_trait]
pub trait PasswordFilePort: Send + Sync {
    /// Load the encryption password stored at `path`.
    ///
    /// An empty file yields an empty passphrase, not an error.
    async fn read_password(&self, path: &Path) -> Result<Passphrase, PasswordFileError>;
}
