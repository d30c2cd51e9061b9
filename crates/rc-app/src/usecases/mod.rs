mod paste_clipboard;

pub use paste_clipboard::{ErrorKind, PasteClipboard, PasteError, PasteReport, PasteState};
