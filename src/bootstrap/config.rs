//! # Configuration loading
//!
//! ## Responsibilities
//!
//! - Read the optional TOML config file
//! - Merge it with command line flags and environment variables into a
//!   [`PasteConfig`]
//!
//! Precedence is flag/env first, then the config file, then the defaults in
//! `rc_core::config`. Value checks (empty address, size syntax) are left to
//! the use case.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context};
use rc_core::config::{PasteConfig, DEFAULT_MAX_SIZE, DEFAULT_TIMEOUT};

use crate::cli::PasteArgs;

pub const SERVER_ENV: &str = "RCLIP_SERVER";
pub const PASSWORD_FILE_ENV: &str = "RCLIP_PASSWORD_FILE";
pub const CONFIG_ENV: &str = "RCLIP_CONFIG";

/// Values found in the config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub address: Option<String>,
    pub timeout: Option<String>,
    pub basic_auth: Option<String>,
    pub max_size: Option<String>,
    pub password_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let server_str = |key: &str| {
            toml_value
                .get("server")
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self {
            address: server_str("address"),
            timeout: server_str("timeout"),
            basic_auth: server_str("basic_auth"),
            max_size: server_str("max_size"),
            password_file: toml_value
                .get("security")
                .and_then(|s| s.get("password_file"))
                .and_then(|v| v.as_str())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// `<config dir>/rclip/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rclip").join("config.toml"))
}

/// Load the config file.
///
/// An explicitly given path must exist. Without one, the default location is
/// tried and silently skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<FileConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => load_config_file(&path),
            _ => Ok(FileConfig::default()),
        },
    }
}

pub fn load_config_file(path: &Path) -> anyhow::Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", path.display()))?;
    Ok(FileConfig::from_toml(&toml_value))
}

/// Merge flags, environment and config file into the use case input.
pub fn resolve_paste_config(args: PasteArgs, file: FileConfig) -> anyhow::Result<PasteConfig> {
    let timeout = match (args.timeout, file.timeout) {
        (Some(timeout), _) => timeout,
        (None, Some(raw)) => parse_duration(&raw)
            .map_err(|e| anyhow!(e))
            .context("Invalid server.timeout in config file")?,
        (None, None) => DEFAULT_TIMEOUT,
    };

    Ok(PasteConfig {
        server_address: args.server.or(file.address),
        timeout,
        password: args.password,
        basic_auth: args.basic_auth.or(file.basic_auth).unwrap_or_default(),
        max_size: args
            .max_size
            .or(file.max_size)
            .unwrap_or_else(|| DEFAULT_MAX_SIZE.to_string()),
        password_file: args
            .password_file
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or(file.password_file),
    })
}

/// Parse `500ms`, `5s`, `2m`, `1h` or a bare number of seconds.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let value: u64 = number
        .parse()
        .map_err(|_| format!("invalid duration {input:?}"))?;

    let seconds = |factor: u64| {
        value
            .checked_mul(factor)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration {input:?} is too large"))
    };
    let duration = match unit.trim() {
        "ms" => Duration::from_millis(value),
        "" | "s" => Duration::from_secs(value),
        "m" => seconds(60)?,
        "h" => seconds(60 * 60)?,
        other => return Err(format!("unknown duration unit {other:?} in {input:?}")),
    };

    if duration.is_zero() {
        return Err("duration must be greater than zero".to_string());
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_reads_every_key() {
        let file = write_config(
            r#"
            [server]
            address = "http://192.168.11.5:9090"
            timeout = "10s"
            basic_auth = "user:pass"
            max_size = "1gb"

            [security]
            password_file = "/home/me/.rclip-password"
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.address.as_deref(), Some("http://192.168.11.5:9090"));
        assert_eq!(config.timeout.as_deref(), Some("10s"));
        assert_eq!(config.basic_auth.as_deref(), Some("user:pass"));
        assert_eq!(config.max_size.as_deref(), Some("1gb"));
        assert_eq!(
            config.password_file,
            Some(PathBuf::from("/home/me/.rclip-password"))
        );
    }

    #[test]
    fn test_missing_sections_leave_values_empty() {
        let file = write_config("[server]\n");

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_empty_password_file_in_config_counts_as_unset() {
        let file = write_config("[security]\npassword_file = \"\"\n");

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.password_file, None);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let file = write_config("[server\naddress = ");

        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_flags_win_over_config_file() {
        let args = PasteArgs {
            server: Some("http://flag".to_string()),
            timeout: Some(Duration::from_secs(1)),
            max_size: Some("1mb".to_string()),
            ..PasteArgs::default()
        };
        let file = FileConfig {
            address: Some("http://file".to_string()),
            timeout: Some("30s".to_string()),
            basic_auth: Some("user:pass".to_string()),
            max_size: Some("1gb".to_string()),
            password_file: Some(PathBuf::from("/file/password")),
        };

        let config = resolve_paste_config(args, file).unwrap();

        assert_eq!(config.server_address.as_deref(), Some("http://flag"));
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.max_size, "1mb");
        assert_eq!(config.basic_auth, "user:pass");
        assert_eq!(config.password_file, Some(PathBuf::from("/file/password")));
    }

    #[test]
    fn test_defaults_apply_when_nothing_is_set() {
        let config = resolve_paste_config(PasteArgs::default(), FileConfig::default()).unwrap();

        assert_eq!(config.server_address, None);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.password, None);
        assert_eq!(config.basic_auth, "");
        assert_eq!(config.max_size, "500mb");
        assert_eq!(config.password_file, None);
    }

    #[test]
    fn test_invalid_timeout_in_config_file_is_reported() {
        let file = FileConfig {
            timeout: Some("eventually".to_string()),
            ..FileConfig::default()
        };

        let err = resolve_paste_config(PasteArgs::default(), file).unwrap_err();

        assert!(err.to_string().contains("server.timeout"));
    }

    #[test]
    fn test_parse_duration_understands_units() {
        assert_eq!(parse_duration("5s"), Ok(Duration::from_secs(5)));
        assert_eq!(parse_duration("5"), Ok(Duration::from_secs(5)));
        assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_duration(" 3 s "), Ok(Duration::from_secs(3)));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("5 days").is_err());
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("-1s").is_err());
    }
}
