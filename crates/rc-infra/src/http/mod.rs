mod auth;
mod client;

pub use auth::apply_basic_auth;
pub use client::{HttpClipboardServer, MAX_SALT_SIZE};
