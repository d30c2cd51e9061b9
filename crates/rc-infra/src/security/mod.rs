mod decryptor;

pub use decryptor::{derive_key, AesGcmDecryptor, KDF_ITERATIONS, NONCE_LEN};
