//! Caller-facing parameter types: mode of operation, padding scheme, text encoding,
//! and the [`CipherOptions`] bundle passed to [`encrypt`](crate::encrypt) and
//! [`decrypt`](crate::decrypt).

use std::fmt;

use crate::key::KeySize;

/// Block-cipher mode of operation. Closed set; there is no authenticated mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CipherMode {
    /// Cipher block chaining.
    #[default]
    Cbc,
    /// Electronic codebook. The only mode that takes no IV.
    Ecb,
    /// Full-block (128-bit) cipher feedback.
    Cfb,
    /// Output feedback.
    Ofb,
    /// Counter mode, 128-bit big-endian counter seeded from the IV.
    Ctr,
}

impl CipherMode {
    pub const ALL: [CipherMode; 5] = [
        CipherMode::Cbc,
        CipherMode::Ecb,
        CipherMode::Cfb,
        CipherMode::Ofb,
        CipherMode::Ctr,
    ];

    /// Looks up a mode by name, ignoring case. Returns `None` for unknown names;
    /// see [`resolve`](crate::resolve) for the defaulting lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cbc" => Some(CipherMode::Cbc),
            "ecb" => Some(CipherMode::Ecb),
            "cfb" => Some(CipherMode::Cfb),
            "ofb" => Some(CipherMode::Ofb),
            "ctr" => Some(CipherMode::Ctr),
            _ => None,
        }
    }

    /// `false` only for ECB.
    pub fn requires_iv(self) -> bool {
        !matches!(self, CipherMode::Ecb)
    }

    /// CBC and ECB operate on whole blocks and are padded. CFB, OFB and CTR turn AES
    /// into a keystream and never are.
    pub fn is_block_mode(self) -> bool {
        matches!(self, CipherMode::Cbc | CipherMode::Ecb)
    }

    pub fn name(self) -> &'static str {
        match self {
            CipherMode::Cbc => "CBC",
            CipherMode::Ecb => "ECB",
            CipherMode::Cfb => "CFB",
            CipherMode::Ofb => "OFB",
            CipherMode::Ctr => "CTR",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Padding applied to the plaintext before block-mode encryption.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PaddingMode {
    /// Each pad byte holds the pad length. Always adds 1..=16 bytes.
    #[default]
    Pkcs7,
    /// Zero bytes up to the next block boundary; nothing if already aligned.
    /// Trailing zero bytes of the plaintext are lost on decryption.
    ZeroPadding,
    /// No padding. Block modes then require block-aligned plaintext.
    NoPadding,
}

impl PaddingMode {
    pub const ALL: [PaddingMode; 3] = [
        PaddingMode::Pkcs7,
        PaddingMode::ZeroPadding,
        PaddingMode::NoPadding,
    ];

    /// Looks up a padding scheme by name, ignoring case. Accepts `pkcs7`/`pkcs5`,
    /// `zeropadding`/`zero` and `nopadding`/`none`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pkcs7" | "pkcs5" => Some(PaddingMode::Pkcs7),
            "zeropadding" | "zero" => Some(PaddingMode::ZeroPadding),
            "nopadding" | "none" => Some(PaddingMode::NoPadding),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaddingMode::Pkcs7 => "PKCS7",
            PaddingMode::ZeroPadding => "ZeroPadding",
            PaddingMode::NoPadding => "NoPadding",
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text encoding of ciphertext (and the declared encoding of ciphertext input).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Encoding {
    #[default]
    Base64,
    Hex,
    Utf8,
}

impl Encoding {
    pub const ALL: [Encoding; 3] = [Encoding::Base64, Encoding::Hex, Encoding::Utf8];

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
            Encoding::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed for one encrypt or decrypt call.
///
/// `key` and `iv` are text; their bytes are used directly as key material (see
/// [`normalize_key`](crate::normalize_key)). They are redacted from `Debug` output.
///
/// ```
/// use aes_text::{CipherMode, CipherOptions, Encoding, KeySize, PaddingMode};
///
/// let opts = CipherOptions {
///     mode: CipherMode::Ctr,
///     padding: PaddingMode::NoPadding,
///     key_size: KeySize::Bits256,
///     key: "0123456789abcdef0123456789abcdef".into(),
///     iv: "abcdef0123456789".into(),
///     encoding: Encoding::Hex,
/// };
/// assert!(!format!("{opts:?}").contains("0123456789abcdef"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CipherOptions {
    pub mode: CipherMode,
    pub padding: PaddingMode,
    pub key_size: KeySize,
    pub key: String,
    pub iv: String,
    pub encoding: Encoding,
}

impl CipherOptions {
    /// Options with the given key and IV text and default mode (CBC), padding (PKCS7),
    /// key size (128) and encoding (Base64).
    pub fn new(key: impl Into<String>, iv: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            iv: iv.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: CipherMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_padding(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_key_size(mut self, key_size: KeySize) -> Self {
        self.key_size = key_size;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl fmt::Debug for CipherOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherOptions")
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("key_size", &self.key_size)
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .field("encoding", &self.encoding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_are_case_insensitive() {
        assert_eq!(CipherMode::from_name("cbc"), Some(CipherMode::Cbc));
        assert_eq!(CipherMode::from_name("ECB"), Some(CipherMode::Ecb));
        assert_eq!(CipherMode::from_name(" Ctr "), Some(CipherMode::Ctr));
        assert_eq!(CipherMode::from_name("gcm"), None);
    }

    #[test]
    fn padding_aliases() {
        assert_eq!(PaddingMode::from_name("Pkcs5"), Some(PaddingMode::Pkcs7));
        assert_eq!(PaddingMode::from_name("zero"), Some(PaddingMode::ZeroPadding));
        assert_eq!(PaddingMode::from_name("NONE"), Some(PaddingMode::NoPadding));
        assert_eq!(PaddingMode::from_name("iso10126"), None);
    }

    #[test]
    fn only_ecb_skips_iv() {
        for mode in CipherMode::ALL {
            assert_eq!(mode.requires_iv(), mode != CipherMode::Ecb, "{mode}");
        }
    }

    #[test]
    fn debug_redacts_key_and_iv() {
        let opts = CipherOptions::new("super secret key", "initialisation v");
        let dbg = format!("{opts:?}");
        assert!(!dbg.contains("super secret key"));
        assert!(!dbg.contains("initialisation v"));
        assert!(dbg.contains("Cbc"));
    }
}
