//! Password based AES-256-GCM, compatible with what the copy side stores.
//!
//! Wire layout: `nonce (12 bytes) || ciphertext || tag (16 bytes)`.
//! Key: PBKDF2-HMAC-SHA256 over (password, salt).

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use async_trait::async_trait;
use pbkdf2::pbkdf2_hmac;
use rc_core::ports::{DecryptionError, DecryptionPort};
use rc_core::{Passphrase, Salt};
use sha2::Sha256;

pub const KDF_ITERATIONS: u32 = 4096;
pub const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

/// Derive the 32-byte AES key for `passphrase` and `salt`.
pub fn derive_key(passphrase: &Passphrase, salt: &Salt) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt.as_bytes(), KDF_ITERATIONS, &mut key);
    key
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AesGcmDecryptor;

impl AesGcmDecryptor {
    pub fn new() -> Self {
        Self
    }

    fn cipher(passphrase: &Passphrase, salt: &Salt) -> Result<Aes256Gcm, DecryptionError> {
        let key = derive_key(passphrase, salt);
        Aes256Gcm::new_from_slice(&key).map_err(|e| DecryptionError::InvalidKey(e.to_string()))
    }

    /// Encrypt `plaintext` with a fresh random nonce.
    ///
    /// The paste path never encrypts; this produces fixtures and lets tooling
    /// check a password against a server without going through `copy`.
    pub fn encrypt(
        &self,
        passphrase: &Passphrase,
        salt: &Salt,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, DecryptionError> {
        let cipher = Self::cipher(passphrase, salt)?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| DecryptionError::InvalidKey(e.to_string()))?;
        Ok([nonce.as_slice(), &ciphertext].concat())
    }

    pub fn decrypt_sync(
        &self,
        passphrase: &Passphrase,
        salt: &Salt,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, DecryptionError> {
        if ciphertext.len() < NONCE_LEN {
            return Err(DecryptionError::CiphertextTooShort {
                len: ciphertext.len(),
            });
        }
        let cipher = Self::cipher(passphrase, salt)?;
        let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);
        cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| DecryptionError::AuthenticationFailed)
    }
}

#[async_trait]
impl DecryptionPort for AesGcmDecryptor {
    async fn decrypt(
        &self,
        passphrase: &Passphrase,
        salt: &Salt,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, DecryptionError> {
        self.decrypt_sync(passphrase, salt, ciphertext)
    }
}
