use std::io;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use rc_core::ports::{ClipboardServerPort, ContentStream, SaltFetchError, TransportError};
use rc_core::{read_at_most, BasicAuth, Salt, ServerAddress};
use reqwest::{StatusCode, Url};
use tokio_util::io::StreamReader;
use tracing::debug;

use super::auth::apply_basic_auth;

/// Upper bound for the salt body. Salts are a few dozen bytes; anything
/// bigger is a misbehaving server.
pub const MAX_SALT_SIZE: u64 = 4 * 1024;

/// Clipboard server client over plain HTTP(S).
///
/// One `reqwest::Client` is shared by the content and salt requests; its
/// timeout applies to each request on its own.
pub struct HttpClipboardServer {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClipboardServer {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                TransportError::RequestConstruction(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout })
    }

    async fn get(&self, url: &str, auth: &BasicAuth) -> Result<reqwest::Response, TransportError> {
        let url = Url::parse(url)
            .map_err(|e| TransportError::RequestConstruction(format!("invalid url: {}", e)))?;
        let request = apply_basic_auth(self.client.get(url), auth)
            .build()
            .map_err(|e| TransportError::RequestConstruction(e.to_string()))?;

        debug!(
            host = request.url().host_str().unwrap_or_default(),
            path = request.url().path(),
            "Issuing GET request"
        );
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.execution_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::UnexpectedStatus {
                status: status.to_string(),
            });
        }
        Ok(response)
    }

    fn execution_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else {
            TransportError::RequestExecution(err.to_string())
        }
    }
}

fn body_stream(response: reqwest::Response) -> ContentStream {
    let stream = response.bytes_stream().map_err(io::Error::other);
    Box::pin(StreamReader::new(stream))
}

#[async_trait]
impl ClipboardServerPort for HttpClipboardServer {
    async fn open_content(
        &self,
        address: &ServerAddress,
        auth: &BasicAuth,
    ) -> Result<ContentStream, TransportError> {
        let response = self.get(address.as_str(), auth).await?;
        debug!(
            content_length = ?response.content_length(),
            "Clipboard content response received"
        );
        Ok(body_stream(response))
    }

    async fn fetch_salt(
        &self,
        address: &ServerAddress,
        auth: &BasicAuth,
    ) -> Result<Salt, SaltFetchError> {
        let response = self.get(&address.salt_url(), auth).await?;
        let mut body = body_stream(response);
        let salt = read_at_most(&mut body, MAX_SALT_SIZE)
            .await
            .map_err(SaltFetchError::Read)?;

        debug!(salt_len = salt.len(), "Salt received");
        Ok(Salt::new(salt))
    }
}
