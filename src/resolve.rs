//! Mode/padding resolution: mode and padding names to the closed enums, plus the IV
//! requirement that follows from the mode.
//!
//! Unknown names do not fail. An unknown mode resolves to CBC and an unknown padding
//! to PKCS7, so a misspelt mode silently selects a different cipher. Each fallback is
//! a separate match arm and logs a warning.

use tracing::warn;

use crate::options::{CipherMode, PaddingMode};

/// Outcome of resolving a mode and padding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    pub mode: CipherMode,
    pub padding: PaddingMode,
    /// `false` only for ECB.
    pub iv_required: bool,
}

impl Resolution {
    pub fn new(mode: CipherMode, padding: PaddingMode) -> Self {
        Self {
            mode,
            padding,
            iv_required: mode.requires_iv(),
        }
    }

    /// Padding the engine actually applies: the requested one for CBC and ECB,
    /// `NoPadding` for the stream modes.
    pub fn effective_padding(&self) -> PaddingMode {
        if self.mode.is_block_mode() {
            self.padding
        } else {
            PaddingMode::NoPadding
        }
    }
}

/// Resolves a mode name and a padding name (case-insensitive).
///
/// ```
/// use aes_text::{CipherMode, PaddingMode, resolve};
///
/// let r = resolve("ecb", "ZeroPadding");
/// assert_eq!(r.mode, CipherMode::Ecb);
/// assert_eq!(r.padding, PaddingMode::ZeroPadding);
/// assert!(!r.iv_required);
///
/// // unknown names fall back to CBC / PKCS7
/// let r = resolve("gcm", "iso10126");
/// assert_eq!((r.mode, r.padding, r.iv_required), (CipherMode::Cbc, PaddingMode::Pkcs7, true));
/// ```
pub fn resolve(mode: &str, padding: &str) -> Resolution {
    let mode = match CipherMode::from_name(mode) {
        Some(known) => known,
        None => {
            warn!(requested = mode, fallback = %CipherMode::Cbc, "unknown cipher mode");
            CipherMode::Cbc
        }
    };
    let padding = match PaddingMode::from_name(padding) {
        Some(known) => known,
        None => {
            warn!(requested = padding, fallback = %PaddingMode::Pkcs7, "unknown padding");
            PaddingMode::Pkcs7
        }
    };
    Resolution::new(mode, padding)
}
