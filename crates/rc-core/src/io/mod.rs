mod bounded;

pub use bounded::{read_at_most, BoundedReadError};
