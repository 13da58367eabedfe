//! AES text encryption with a selectable mode of operation (CBC, ECB, CFB, OFB, CTR),
//! padding (PKCS7, zero, none), key size (128, 192, 256) and ciphertext encoding
//! (Base64, hex, UTF-8).
//!
//! Key and IV are given as text and used directly as key material: longer text is
//! truncated, shorter text is rejected. This is not a password-based scheme and there is
//! no integrity protection; see [`normalize_key`].
//!
//! ```
//! # fn main() -> aes_text::Result<()> {
//! use aes_text::{CipherMode, CipherOptions, Encoding, KeySize, decrypt, encrypt};
//!
//! let opts = CipherOptions::new("0123456789abcdef0123456789abcdef", "abcdef0123456789")
//!     .with_mode(CipherMode::Cfb)
//!     .with_key_size(KeySize::Bits256)
//!     .with_encoding(Encoding::Hex);
//!
//! let ciphertext = encrypt("hello world", &opts)?;
//! assert_eq!(ciphertext.len(), 22); // stream mode, no padding
//! assert_eq!(decrypt(&ciphertext, &opts)?, "hello world");
//! # Ok(())
//! # }
//! ```

mod cipher;
mod codec;
mod core;
mod error;
mod key;
mod modes;
mod options;
mod pipeline;
mod resolve;

pub use cipher::{Cipher, Direction, transform};
pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use key::{
    BLOCK_LEN, IvMaterial, KeyMaterial, KeySize, normalize_iv, normalize_key, random_iv_text,
    random_key_text,
};
pub use options::{CipherMode, CipherOptions, Encoding, PaddingMode};
pub use pipeline::{decrypt, decrypt_bytes, encrypt, encrypt_bytes};
pub use resolve::{Resolution, resolve};
