use async_trait::async_trait;

use super::errors::DecryptionError;
use crate::security::{Passphrase, Salt};

#[async_trait]
pub trait DecryptionPort: Send + Sync {
    /// Reverse the password based encryption applied on copy.
    ///
    /// Semantics:
    /// - Deterministic: same (passphrase, salt, ciphertext) => same result
    /// - Wrong passphrase or salt => `DecryptionError::AuthenticationFailed`
    async fn decrypt(
        &self,
        passphrase: &Passphrase,
        salt: &Salt,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, DecryptionError>;
}
