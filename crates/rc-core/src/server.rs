//! Remote clipboard server addressing and credentials.

use std::fmt;

/// Sub-path serving the salt that belongs to the stored content.
pub const SALT_PATH: &str = "/salt";

/// URL of the remote clipboard endpoint.
///
/// Never empty. The trailing slash is kept as given for the primary fetch
/// and removed by [`ServerAddress::join`] before appending sub-paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress(String);

impl ServerAddress {
    /// Returns `None` for an empty or whitespace-only address.
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        Some(Self(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address with a single trailing `/` removed.
    pub fn without_trailing_slash(&self) -> &str {
        self.0.strip_suffix('/').unwrap_or(&self.0)
    }

    /// Append `path` (which starts with `/`) to the normalized address.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.without_trailing_slash(), path)
    }

    pub fn salt_url(&self) -> String {
        self.join(SALT_PATH)
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTTP basic auth credentials given as `username:password`.
///
/// An empty string means no authentication. The format is not validated
/// here: a value without a colon becomes a username without password and
/// the HTTP layer deals with it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BasicAuth(String);

impl BasicAuth {
    pub fn new(credentials: impl Into<String>) -> Self {
        Self(credentials.into())
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into `(username, password)`, `None` when no credentials are set.
    pub fn credentials(&self) -> Option<(&str, Option<&str>)> {
        if self.0.is_empty() {
            return None;
        }
        match self.0.split_once(':') {
            Some((username, password)) => Some((username, Some(password))),
            None => Some((self.0.as_str(), None)),
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "BasicAuth(None)")
        } else {
            write!(f, "BasicAuth([REDACTED])")
        }
    }
}
