//! # rc-infra
//!
//! Implementations of the `rc-core` ports:
//!
//! - [`http::HttpClipboardServer`]: reqwest based clipboard server client
//! - [`security::AesGcmDecryptor`]: PBKDF2 + AES-256-GCM cipher
//! - [`fs::FsPasswordFile`]: password file reader

pub mod fs;
pub mod http;
pub mod security;

pub use fs::FsPasswordFile;
pub use http::HttpClipboardServer;
pub use security::AesGcmDecryptor;
