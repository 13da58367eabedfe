use tracing::debug;
use zeroize::Zeroize;

use crate::core::expand_key;
use crate::error::{Error, Result};
use crate::key::{BLOCK_LEN, IvMaterial, KeyMaterial};
use crate::modes::padding::{pad, unpad};
use crate::modes::*;
use crate::options::{CipherMode, PaddingMode};

/// Direction of a [`transform`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// AES encryption and decryption in modes ECB, CBC, CFB, OFB and CTR.
/// Instantiated with a [KeyMaterial], which is expanded into round keys and stored in
/// the instance. Round keys are wiped on drop.
///
/// The IV is never embedded in the output; callers keep it alongside the ciphertext.
///
/// ```
/// # fn main() -> aes_text::Result<()> {
/// use aes_text::{Cipher, CipherMode, IvMaterial, KeyMaterial, PaddingMode};
///
/// let key = KeyMaterial::try_from_slice(&[0x2b; 32])?;
/// let iv = IvMaterial::new([0x11; 16]);
/// let cipher = Cipher::new(&key);
///
/// let ct = cipher.encrypt(b"Hello, World!", CipherMode::Ctr, PaddingMode::Pkcs7, Some(&iv))?;
/// assert_eq!(ct.len(), 13); // stream modes ignore padding
///
/// let pt = cipher.decrypt(&ct, CipherMode::Ctr, PaddingMode::Pkcs7, Some(&iv))?;
/// assert_eq!(pt, b"Hello, World!");
/// # Ok(())
/// # }
/// ```
pub struct Cipher {
    round_keys: Vec<[u8; 16]>,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &KeyMaterial) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Getter for internal round keys. Returned as a slice of 16-byte arrays.
    pub fn round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys
    }

    /// Encrypts `plaintext` in `mode`.
    ///
    /// CBC and ECB pad the plaintext with `padding` first. CFB, OFB and CTR ignore
    /// `padding` and return ciphertext of the same length as the plaintext. `iv` is
    /// ignored for ECB and required otherwise.
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<&IvMaterial>,
    ) -> Result<Vec<u8>> {
        let rk = &self.round_keys;
        if !mode.is_block_mode() && padding != PaddingMode::NoPadding {
            debug!(%mode, %padding, "padding ignored for stream mode");
        }

        Ok(match mode {
            CipherMode::Ecb => ecb_encrypt(&pad(plaintext, padding)?, rk),
            CipherMode::Cbc => cbc_encrypt(&pad(plaintext, padding)?, rk, require_iv(iv, mode)?),
            CipherMode::Cfb => cfb_encrypt(plaintext, rk, require_iv(iv, mode)?),
            CipherMode::Ofb => ofb_apply(plaintext, rk, require_iv(iv, mode)?),
            CipherMode::Ctr => ctr_apply(plaintext, rk, require_iv(iv, mode)?),
        })
    }

    /// Decrypts `ciphertext` in `mode`.
    ///
    /// Block-mode ciphertext that is empty, not a multiple of 16 bytes, or carries
    /// malformed PKCS#7 padding is a DecryptionFailed error. Stream modes cannot detect
    /// a wrong key or IV and return garbage instead.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<&IvMaterial>,
    ) -> Result<Vec<u8>> {
        let rk = &self.round_keys;
        if mode.is_block_mode() && (ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0)
        {
            return Err(Error::DecryptionFailed {
                context: "block-mode ciphertext must be a non-empty multiple of 16 bytes",
            });
        }

        match mode {
            CipherMode::Ecb => unpad(ecb_decrypt(ciphertext, rk), padding),
            CipherMode::Cbc => unpad(cbc_decrypt(ciphertext, rk, require_iv(iv, mode)?), padding),
            CipherMode::Cfb => Ok(cfb_decrypt(ciphertext, rk, require_iv(iv, mode)?)),
            CipherMode::Ofb => Ok(ofb_apply(ciphertext, rk, require_iv(iv, mode)?)),
            CipherMode::Ctr => Ok(ctr_apply(ciphertext, rk, require_iv(iv, mode)?)),
        }
    }
}

impl Drop for Cipher {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

fn require_iv(iv: Option<&IvMaterial>, mode: CipherMode) -> Result<&[u8; BLOCK_LEN]> {
    iv.map(IvMaterial::as_bytes).ok_or(Error::IvRequired { mode })
}

/// One-shot engine entry point: expands `key` and runs [`Cipher::encrypt`] or
/// [`Cipher::decrypt`] over `input`.
pub fn transform(
    direction: Direction,
    input: &[u8],
    key: &KeyMaterial,
    iv: Option<&IvMaterial>,
    mode: CipherMode,
    padding: PaddingMode,
) -> Result<Vec<u8>> {
    let cipher = Cipher::new(key);
    match direction {
        Direction::Encrypt => cipher.encrypt(input, mode, padding, iv),
        Direction::Decrypt => cipher.decrypt(input, mode, padding, iv),
    }
}
