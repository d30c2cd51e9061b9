//! # Paste configuration DTO
//!
//! ## Responsibilities
//!
//! - Carry the options of one `paste` invocation into the use case
//! - Provide the documented defaults
//!
//! ## Prohibited
//!
//! - No environment access: the binary resolves flags, env vars and the
//!   config file, then hands a finished `PasteConfig` to the use case
//! - No validation: an empty address or a malformed size string is a fact,
//!   the use case decides what it means

use std::path::PathBuf;
use std::time::Duration;

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Response body cap used when nothing else is configured.
pub const DEFAULT_MAX_SIZE: &str = "500mb";

/// Options for a single paste.
#[derive(Clone)]
pub struct PasteConfig {
    /// Remote clipboard endpoint (may be missing - the use case reports it)
    pub server_address: Option<String>,

    /// Applied to each HTTP request independently
    pub timeout: Duration,

    /// Explicit encryption password; wins over `password_file`
    pub password: Option<String>,

    /// `username:password` for HTTP basic auth, empty for none
    pub basic_auth: String,

    /// Human readable cap for the response body, e.g. `500mb`
    pub max_size: String,

    /// File holding the encryption password, consulted only without `password`
    pub password_file: Option<PathBuf>,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            server_address: None,
            timeout: DEFAULT_TIMEOUT,
            password: None,
            basic_auth: String::new(),
            max_size: DEFAULT_MAX_SIZE.to_string(),
            password_file: None,
        }
    }
}

impl std::fmt::Debug for PasteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteConfig")
            .field("server_address", &self.server_address)
            .field("timeout", &self.timeout)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field(
                "basic_auth",
                &if self.basic_auth.is_empty() { "" } else { "[REDACTED]" },
            )
            .field("max_size", &self.max_size)
            .field("password_file", &self.password_file)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_values() {
        let config = PasteConfig::default();

        assert_eq!(config.server_address, None);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.password, None);
        assert_eq!(config.basic_auth, "");
        assert_eq!(config.max_size, "500mb");
        assert_eq!(config.password_file, None);
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = PasteConfig {
            password: Some("hunter2".to_string()),
            basic_auth: "alice:wonderland".to_string(),
            ..PasteConfig::default()
        };

        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("wonderland"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
