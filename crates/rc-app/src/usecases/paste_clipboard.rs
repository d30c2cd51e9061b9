//! # Paste clipboard use case
//!
//! ## Responsibilities
//!
//! - Fetch the remote clipboard through [`ClipboardServerPort`]
//! - Enforce the configured size limit while the body streams in
//! - Decrypt through [`DecryptionPort`] when a password is configured
//! - Write the result to the caller's output
//!
//! ## Prohibited
//!
//! - No HTTP, crypto or filesystem details. Those live behind the ports.
//! - No partial output. Nothing is written until every step has succeeded.

use std::fmt;
use std::sync::Arc;

use rc_core::ports::{
    ClipboardServerPort, DecryptionError, DecryptionPort, PasswordFileError, PasswordFilePort,
    SaltFetchError, TransportError,
};
use rc_core::{
    read_at_most, BasicAuth, BoundedReadError, DataSize, Passphrase, PasteConfig, Salt,
    ServerAddress, SizeFormatError,
};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error("no server address configured")]
    MissingServerAddress,

    #[error("failed to fetch clipboard content")]
    Fetch(#[source] TransportError),

    #[error("failed to parse data size")]
    InvalidSize(#[source] SizeFormatError),

    #[error("failed to read the response body")]
    ReadBody(#[source] BoundedReadError),

    #[error("failed to load password")]
    PasswordFile(#[source] PasswordFileError),

    #[error("failed to get salt")]
    Salt(#[source] SaltFetchError),

    #[error("failed to decrypt the data")]
    Decrypt(#[source] DecryptionError),

    #[error("failed to write output")]
    Output(#[source] std::io::Error),
}

/// Coarse failure classes, for callers that branch on the kind of failure
/// rather than the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    SizeFormat,
    Transport,
    PayloadTooLarge,
    Crypto,
    Output,
}

impl PasteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PasteError::MissingServerAddress | PasteError::PasswordFile(_) => {
                ErrorKind::Configuration
            }
            PasteError::InvalidSize(_) => ErrorKind::SizeFormat,
            PasteError::Fetch(_) => ErrorKind::Transport,
            PasteError::ReadBody(err) | PasteError::Salt(SaltFetchError::Read(err)) => match err {
                BoundedReadError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
                BoundedReadError::Io(_) => ErrorKind::Transport,
            },
            PasteError::Salt(SaltFetchError::Transport(_)) => ErrorKind::Transport,
            PasteError::Decrypt(_) => ErrorKind::Crypto,
            PasteError::Output(_) => ErrorKind::Output,
        }
    }
}

/// Where a paste stands once the body has been read.
///
/// `NoPasswordFetch` is terminal: the body is plaintext and no salt is ever
/// requested. With a password the paste moves `PasswordNoSalt` ->
/// `PasswordWithSalt` -> decrypted.
pub enum PasteState {
    NoPasswordFetch {
        body: Vec<u8>,
    },
    PasswordNoSalt {
        body: Vec<u8>,
        passphrase: Passphrase,
    },
    PasswordWithSalt {
        body: Vec<u8>,
        passphrase: Passphrase,
        salt: Salt,
    },
}

impl PasteState {
    pub fn new(body: Vec<u8>, passphrase: Option<Passphrase>) -> Self {
        match passphrase {
            Some(passphrase) => PasteState::PasswordNoSalt { body, passphrase },
            None => PasteState::NoPasswordFetch { body },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PasteState::NoPasswordFetch { .. } => "no_password_fetch",
            PasteState::PasswordNoSalt { .. } => "password_no_salt",
            PasteState::PasswordWithSalt { .. } => "password_with_salt",
        }
    }
}

impl fmt::Debug for PasteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body_len = match self {
            PasteState::NoPasswordFetch { body }
            | PasteState::PasswordNoSalt { body, .. }
            | PasteState::PasswordWithSalt { body, .. } => body.len(),
        };
        f.debug_struct("PasteState")
            .field("state", &self.name())
            .field("body_len", &body_len)
            .finish()
    }
}

/// Summary of a successful paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteReport {
    pub bytes_written: usize,
    pub decrypted: bool,
}

/// Use case fetching the remote clipboard and writing it to an output.
///
/// Linear and fail-fast: each step either succeeds or aborts the paste with
/// an error naming the step. The output is written once, after every
/// fallible step, so a late failure never leaves partial content behind.
pub struct PasteClipboard {
    config: PasteConfig,
    server: Arc<dyn ClipboardServerPort>,
    decryptor: Arc<dyn DecryptionPort>,
    password_file: Arc<dyn PasswordFilePort>,
}

impl PasteClipboard {
    pub fn new(
        config: PasteConfig,
        server: Arc<dyn ClipboardServerPort>,
        decryptor: Arc<dyn DecryptionPort>,
        password_file: Arc<dyn PasswordFilePort>,
    ) -> Self {
        Self {
            config,
            server,
            decryptor,
            password_file,
        }
    }

    /// Runs the paste and writes the resulting bytes to `out`.
    ///
    /// Steps:
    /// 1. Resolve the server address
    /// 2. `GET` the content
    /// 3. Read at most `max_size` bytes of it
    /// 4. Resolve the password (explicit value, then password file)
    /// 5. With a password, fetch the salt and decrypt
    /// 6. Write the result to `out`
    #[tracing::instrument(name = "usecase.paste_clipboard.execute", skip_all)]
    pub async fn execute<W>(&self, out: &mut W) -> Result<PasteReport, PasteError>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        // 1. Resolve address
        let address = self
            .config
            .server_address
            .as_deref()
            .and_then(|address| ServerAddress::new(address))
            .ok_or(PasteError::MissingServerAddress)?;
        let auth = BasicAuth::new(self.config.basic_auth.clone());

        // 2. Primary fetch
        info!(timeout = ?self.config.timeout, "Fetching clipboard content");
        let mut stream = self
            .server
            .open_content(&address, &auth)
            .await
            .map_err(PasteError::Fetch)?;

        // 3. Bound body
        let limit = DataSize::parse(&self.config.max_size).map_err(PasteError::InvalidSize)?;
        let body = read_at_most(&mut stream, limit.bytes())
            .await
            .map_err(PasteError::ReadBody)?;
        drop(stream);
        debug!(bytes = body.len(), limit = limit.bytes(), "Read clipboard content");

        // 4. Resolve password
        let passphrase = self.resolve_passphrase().await?;

        // 5. Conditional decrypt
        let (output, decrypted) = self
            .settle(PasteState::new(body, passphrase), &address, &auth)
            .await?;

        // 6. Emit
        out.write_all(&output).await.map_err(PasteError::Output)?;
        out.flush().await.map_err(PasteError::Output)?;

        info!(bytes = output.len(), decrypted, "Pasted clipboard content");
        Ok(PasteReport {
            bytes_written: output.len(),
            decrypted,
        })
    }

    /// Explicit password first, then the password file; empty values count
    /// as absent.
    async fn resolve_passphrase(&self) -> Result<Option<Passphrase>, PasteError> {
        if let Some(password) = self.config.password.as_deref().filter(|p| !p.is_empty()) {
            return Ok(Some(Passphrase::new(password)));
        }

        let Some(path) = self.config.password_file.as_deref() else {
            return Ok(None);
        };
        let passphrase = self
            .password_file
            .read_password(path)
            .await
            .map_err(PasteError::PasswordFile)?;

        Ok((!passphrase.is_empty()).then_some(passphrase))
    }

    async fn settle(
        &self,
        mut state: PasteState,
        address: &ServerAddress,
        auth: &BasicAuth,
    ) -> Result<(Vec<u8>, bool), PasteError> {
        loop {
            debug!(state = state.name(), "Paste state");
            state = match state {
                PasteState::NoPasswordFetch { body } => return Ok((body, false)),
                PasteState::PasswordNoSalt { body, passphrase } => {
                    let salt = self
                        .server
                        .fetch_salt(address, auth)
                        .await
                        .map_err(PasteError::Salt)?;
                    PasteState::PasswordWithSalt {
                        body,
                        passphrase,
                        salt,
                    }
                }
                PasteState::PasswordWithSalt {
                    body,
                    passphrase,
                    salt,
                } => {
                    let plaintext = self
                        .decryptor
                        .decrypt(&passphrase, &salt, &body)
                        .await
                        .map_err(PasteError::Decrypt)?;
                    return Ok((plaintext, true));
                }
            };
        }
    }
}
