use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::io::BoundedReadError;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to make request: {0}")]
    RequestConstruction(String),

    #[error("failed to issue get request: {0}")]
    RequestExecution(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed request: status {status}")]
    UnexpectedStatus { status: String },
}

#[derive(Debug, Error)]
pub enum SaltFetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to read the salt")]
    Read(#[source] BoundedReadError),
}

#[derive(Debug, Error)]
pub enum DecryptionError {
    #[error("ciphertext is too short: {len} bytes")]
    CiphertextTooShort { len: usize },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("authentication failed: wrong password, salt or corrupted data")]
    AuthenticationFailed,
}

#[derive(Debug, Error)]
pub enum PasswordFileError {
    #[error("failed to read password file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("password file {} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
}
