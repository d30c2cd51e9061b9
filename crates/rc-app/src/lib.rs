//! # rc-app
//!
//! Application use cases for rclip. Use cases depend on `rc-core` ports
//! only; concrete adapters are wired in by the binary.

pub mod usecases;

pub use usecases::{ErrorKind, PasteClipboard, PasteError, PasteReport};
