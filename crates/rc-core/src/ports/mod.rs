//! Port interfaces for the application layer
//!
//! Ports define the contract between the paste use case and the
//! infrastructure that talks HTTP, runs the cipher and reads files. The use
//! case only ever sees these traits, so it can be driven by fakes in tests.

mod clipboard_server;
mod decryption;
pub mod errors;
mod password_file;

pub use clipboard_server::{ClipboardServerPort, ContentStream};
pub use decryption::DecryptionPort;
pub use errors::{DecryptionError, PasswordFileError, SaltFetchError, TransportError};
pub use password_file::PasswordFilePort;
