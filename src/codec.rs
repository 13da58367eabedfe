//! Conversion between byte buffers and their Base64, hex, or UTF-8 text form.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};
use crate::options::Encoding;

/// Decodes `text` from `encoding` into bytes.
///
/// Base64 uses the standard padded alphabet. Hex accepts either case and must have
/// an even number of digits. Utf8 yields the text's bytes and cannot fail.
pub fn decode(text: &str, encoding: Encoding) -> Result<Vec<u8>> {
    match encoding {
        Encoding::Base64 => STANDARD.decode(text).map_err(|e| invalid(encoding, e)),
        Encoding::Hex => hex::decode(text).map_err(|e| invalid(encoding, e)),
        Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
    }
}

/// Encodes `bytes` as `encoding` text.
///
/// Base64 and hex (lowercase) always succeed. Utf8 fails with InvalidEncoding when
/// the bytes are not valid UTF-8; replacement characters are never substituted.
pub fn encode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Base64 => Ok(STANDARD.encode(bytes)),
        Encoding::Hex => Ok(hex::encode(bytes)),
        Encoding::Utf8 => utf8_text(bytes.to_vec()),
    }
}

/// Takes ownership of `bytes` as a UTF-8 string.
pub(crate) fn utf8_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| invalid(Encoding::Utf8, e.utf8_error()))
}

fn invalid(encoding: Encoding, reason: impl std::fmt::Display) -> Error {
    Error::InvalidEncoding {
        encoding,
        reason: reason.to_string(),
    }
}
