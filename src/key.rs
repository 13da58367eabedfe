//! Key and IV material. Defines [`KeySize`], [`KeyMaterial`] and [`IvMaterial`], the
//! text normalizers that build them from caller-supplied strings, and random key/IV
//! text generation.
//!
//! Key text is used as raw key bytes: text longer than the key size is truncated,
//! shorter text is rejected. There is no key derivation, so a passphrase used as a key
//! has far less entropy than its length suggests. Callers holding a passphrase should
//! derive uniformly random key bytes themselves and pass them through
//! [`KeyMaterial::try_from_slice`].

use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::warn;
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::options::CipherMode;

/// AES block (and IV) length in bytes.
pub const BLOCK_LEN: usize = 16;

const ALPHANUMERIC: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// AES key size.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum KeySize {
    #[default]
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    pub const ALL: [KeySize; 3] = [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256];

    pub fn bits(self) -> u32 {
        match self {
            KeySize::Bits128 => 128,
            KeySize::Bits192 => 192,
            KeySize::Bits256 => 256,
        }
    }

    /// Required key length in bytes: 16, 24 or 32.
    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u32> for KeySize {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Bits128),
            192 => Ok(KeySize::Bits192),
            256 => Ok(KeySize::Bits256),
            _ => Err(Error::InvalidKeySize { bits }),
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[derive(Clone, PartialEq, Eq)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// A valid AES key of 128, 192 or 256 bits. Wiped from memory on drop.
///
/// ```
/// # fn main() -> aes_text::Result<()> {
/// use aes_text::{KeyMaterial, KeySize, normalize_key};
///
/// let key = normalize_key("0123456789abcdef-and-more", KeySize::Bits128)?;
/// assert_eq!(key.as_bytes(), b"0123456789abcdef");
/// assert_eq!(key.size(), KeySize::Bits128);
///
/// // raw bytes must already have an exact AES key length
/// assert!(KeyMaterial::try_from_slice(&[0u8; 20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    bytes: KeyBytes,
}

impl KeyMaterial {
    /// Attempts to build a key from a slice of bytes. Returns an InvalidKeyLength error
    /// if the slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { len: bytes.len() };
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            24 => KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            32 => KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        match &mut self.bytes {
            KeyBytes::K128(k) => k.zeroize(),
            KeyBytes::K192(k) => k.zeroize(),
            KeyBytes::K256(k) => k.zeroize(),
        }
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial(AES-{}, <redacted>)", self.size())
    }
}

/// A 16-byte initialisation vector.
#[derive(Clone, PartialEq, Eq)]
pub struct IvMaterial([u8; BLOCK_LEN]);

impl IvMaterial {
    pub fn new(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an IV from exactly 16 bytes. Any other length is an InvalidIvLength
    /// error.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let iv: [u8; BLOCK_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidIvLength { len: bytes.len() })?;
        Ok(Self(iv))
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }
}

impl Drop for IvMaterial {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for IvMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IvMaterial(<redacted>)")
    }
}

/// Builds key material from key text: the text's bytes, truncated to
/// `key_size.bytes()`.
///
/// Errors with MissingKey for empty text and KeyTooShort when the text has fewer bytes
/// than the key size requires.
pub fn normalize_key(text: &str, key_size: KeySize) -> Result<KeyMaterial> {
    if text.is_empty() {
        return Err(Error::MissingKey);
    }

    let required = key_size.bytes();
    let raw = text.as_bytes();
    if raw.len() < required {
        return Err(Error::KeyTooShort {
            len: raw.len(),
            required,
        });
    }
    if raw.len() > required {
        warn!(
            len = raw.len(),
            required, "key text longer than key size, truncating"
        );
    }

    KeyMaterial::try_from_slice(&raw[..required])
}

/// Builds an IV from IV text: the text's bytes, truncated to 16.
///
/// Never called for ECB. Errors with IvRequired for empty text and IvTooShort for text
/// of fewer than 16 bytes.
pub fn normalize_iv(text: &str, mode: CipherMode) -> Result<IvMaterial> {
    if text.is_empty() {
        return Err(Error::IvRequired { mode });
    }

    let raw = text.as_bytes();
    if raw.len() < BLOCK_LEN {
        return Err(Error::IvTooShort { len: raw.len() });
    }
    if raw.len() > BLOCK_LEN {
        warn!(len = raw.len(), %mode, "iv text longer than 16 bytes, truncating");
    }

    IvMaterial::try_from_slice(&raw[..BLOCK_LEN])
}

/// Random alphanumeric key text of exactly `key_size.bytes()` characters, drawn from
/// the OS RNG. Returns Error if OsRng fails.
pub fn random_key_text(key_size: KeySize) -> Result<String> {
    random_text(key_size.bytes())
}

/// Random alphanumeric IV text of 16 characters. Returns Error if OsRng fails.
pub fn random_iv_text() -> Result<String> {
    random_text(BLOCK_LEN)
}

fn random_text(len: usize) -> Result<String> {
    // reject bytes >= 248 so every character is equally likely (248 = 4 * 62)
    const LIMIT: u8 = (256 - 256 % ALPHANUMERIC.len()) as u8;

    let mut out = String::with_capacity(len);
    let mut buf = [0u8; 32];
    while out.len() < len {
        OsRng.try_fill_bytes(&mut buf)?;
        for &b in buf.iter().filter(|&&b| b < LIMIT) {
            if out.len() == len {
                break;
            }
            out.push(ALPHANUMERIC[b as usize % ALPHANUMERIC.len()] as char);
        }
    }
    buf.zeroize();
    Ok(out)
}
