use rand::rand_core;
use thiserror::Error;

use crate::options::{CipherMode, Encoding};

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for every stage of the encrypt/decrypt pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Plaintext or ciphertext was empty or whitespace-only.
    #[error("input is empty")]
    EmptyInput,

    /// No key text was supplied.
    #[error("no key supplied")]
    MissingKey,

    /// Key text is shorter than the selected key size requires.
    #[error("key too short: {len} bytes (expected at least {required})")]
    KeyTooShort { len: usize, required: usize },

    /// IV text is shorter than one AES block.
    #[error("iv too short: {len} bytes (expected at least 16)")]
    IvTooShort { len: usize },

    /// Attempted to build an IV from a raw slice that is not exactly 16 bytes long.
    #[error("invalid iv length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// Every mode except ECB needs an IV.
    #[error("{mode} mode requires an iv")]
    IvRequired { mode: CipherMode },

    /// Attempted to build a key from a raw slice that is not 16, 24, or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Key size other than 128, 192, or 256 bits.
    #[error("invalid key size: {bits} bits (expected 128, 192, or 256)")]
    InvalidKeySize { bits: u32 },

    /// Text is not well-formed for its declared encoding.
    #[error("invalid {encoding} input: {reason}")]
    InvalidEncoding { encoding: Encoding, reason: String },

    /// Plaintext cannot be processed unpadded by a block mode.
    #[error("invalid input length: {len} bytes ({context})")]
    InvalidInputLength { len: usize, context: &'static str },

    /// Block-mode ciphertext was malformed or its padding did not validate.
    /// Usually means a wrong key, IV, or mode.
    #[error("decryption failed ({context})")]
    DecryptionFailed { context: &'static str },

    /// OS RNG failed while generating key or IV text.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
