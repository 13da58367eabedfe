//! Block-mode padding: PKCS#7, zero padding, and none.

use crate::error::{Error, Result};
use crate::key::BLOCK_LEN;
use crate::options::PaddingMode;

/// Extends `plaintext` to a multiple of 16 bytes according to `padding`.
///
/// `NoPadding` does not extend anything and errors with InvalidInputLength if the
/// plaintext is not already block-aligned.
pub fn pad(plaintext: &[u8], padding: PaddingMode) -> Result<Vec<u8>> {
    let rem = plaintext.len() % BLOCK_LEN;
    match padding {
        PaddingMode::Pkcs7 => {
            let pad_len = BLOCK_LEN - rem; // 16 if rem == 0
            let mut out = Vec::with_capacity(plaintext.len() + pad_len);
            out.extend_from_slice(plaintext);
            out.resize(plaintext.len() + pad_len, pad_len as u8);
            Ok(out)
        }
        PaddingMode::ZeroPadding => {
            let pad_len = (BLOCK_LEN - rem) % BLOCK_LEN; // nothing if aligned
            let mut out = Vec::with_capacity(plaintext.len() + pad_len);
            out.extend_from_slice(plaintext);
            out.resize(plaintext.len() + pad_len, 0);
            Ok(out)
        }
        PaddingMode::NoPadding if rem != 0 => Err(Error::InvalidInputLength {
            len: plaintext.len(),
            context: "NoPadding requires a multiple of 16 bytes in a block mode",
        }),
        PaddingMode::NoPadding => Ok(plaintext.to_vec()),
    }
}

/// Removes padding added by [`pad`]. Malformed PKCS#7 padding is a DecryptionFailed
/// error; zero padding strips every trailing zero byte.
pub fn unpad(mut input: Vec<u8>, padding: PaddingMode) -> Result<Vec<u8>> {
    match padding {
        PaddingMode::Pkcs7 => {
            let pad = match input.last() {
                Some(&b) => b as usize,
                None => {
                    return Err(Error::DecryptionFailed {
                        context: "no data to unpad",
                    });
                }
            };
            if pad == 0 || pad > BLOCK_LEN || pad > input.len() {
                return Err(Error::DecryptionFailed {
                    context: "invalid PKCS#7 padding length",
                });
            }

            let start = input.len() - pad;
            if !input[start..].iter().all(|&b| b as usize == pad) {
                return Err(Error::DecryptionFailed {
                    context: "invalid PKCS#7 padding bytes",
                });
            }

            input.truncate(start);
            Ok(input)
        }
        PaddingMode::ZeroPadding => {
            let end = input.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            input.truncate(end);
            Ok(input)
        }
        PaddingMode::NoPadding => Ok(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pkcs7_always_adds_padding() -> Result<()> {
        assert_eq!(pad(b"", PaddingMode::Pkcs7)?, vec![16u8; 16]);

        let padded = pad(b"hello world", PaddingMode::Pkcs7)?;
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[11..], &[5u8; 5]);

        let padded = pad(&[0xaa; 16], PaddingMode::Pkcs7)?;
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);
        Ok(())
    }

    #[test]
    fn pkcs7_unpad_roundtrip() -> Result<()> {
        for len in [0, 1, 15, 16, 17, 31, 32, 33] {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data, PaddingMode::Pkcs7)?;
            assert_eq!(padded.len() % BLOCK_LEN, 0);
            assert_eq!(unpad(padded, PaddingMode::Pkcs7)?, data, "length {len}");
        }
        Ok(())
    }

    #[test]
    fn pkcs7_rejects_malformed_padding() {
        let cases: [Vec<u8>; 4] = [
            vec![],
            vec![0u8; 16],                  // pad byte 0
            vec![17u8; 16],                 // pad byte > block
            [vec![1u8; 14], vec![3, 2]].concat(), // inconsistent bytes
        ];
        for case in cases {
            assert!(matches!(
                unpad(case, PaddingMode::Pkcs7),
                Err(Error::DecryptionFailed { .. })
            ));
        }
    }

    #[test]
    fn zero_padding() -> Result<()> {
        let padded = pad(b"abc", PaddingMode::ZeroPadding)?;
        assert_eq!(padded.len(), 16);
        assert!(padded[3..].iter().all(|&b| b == 0));
        assert_eq!(unpad(padded, PaddingMode::ZeroPadding)?, b"abc");

        // aligned input gets no extra block
        assert_eq!(pad(&[1u8; 32], PaddingMode::ZeroPadding)?.len(), 32);
        Ok(())
    }

    #[test]
    fn no_padding_requires_alignment() -> Result<()> {
        assert_eq!(pad(&[9u8; 32], PaddingMode::NoPadding)?, vec![9u8; 32]);
        assert!(matches!(
            pad(b"not aligned", PaddingMode::NoPadding),
            Err(Error::InvalidInputLength { len: 11, .. })
        ));
        assert_eq!(unpad(vec![1, 0, 0], PaddingMode::NoPadding)?, vec![1, 0, 0]);
        Ok(())
    }
}
