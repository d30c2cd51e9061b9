use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use super::errors::{SaltFetchError, TransportError};
use crate::security::Salt;
use crate::server::{BasicAuth, ServerAddress};

/// Response body of the primary fetch, not read yet.
pub type ContentStream = Pin<Box<dyn AsyncRead + Send>>;

#[async_trait]
pub trait ClipboardServerPort: Send + Sync {
    /// Issue `GET <address>` and hand back the body as a stream.
    ///
    /// Returns only once a `200 OK` status line was received; the caller is
    /// responsible for bounding how much of the body it reads.
    async fn open_content(
        &self,
        address: &ServerAddress,
        auth: &BasicAuth,
    ) -> Result<ContentStream, TransportError>;

    /// Issue `GET <address>/salt` and return the salt bytes.
    async fn fetch_salt(
        &self,
        address: &ServerAddress,
        auth: &BasicAuth,
    ) -> Result<Salt, SaltFetchError>;
}
