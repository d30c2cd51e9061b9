//! # rc-core
//!
//! Core domain models and business rules for rclip.
//!
//! This crate contains pure logic without any HTTP, crypto or filesystem
//! dependencies. Infrastructure plugs in through the traits in [`ports`].

pub mod config;
pub mod io;
pub mod ports;
pub mod security;
pub mod server;
pub mod size;

// Re-export commonly used types at the crate root
pub use config::PasteConfig;
pub use io::{read_at_most, BoundedReadError};
pub use security::{Passphrase, Salt};
pub use server::{BasicAuth, ServerAddress};
pub use size::{DataSize, SizeFormatError};
