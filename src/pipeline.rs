//! Public encrypt/decrypt entry points. Each call runs a straight-line pipeline:
//! validate, resolve, normalize key and IV, convert the payload, run the engine,
//! convert the result. The first failure is returned and nothing else.

use tracing::debug;

use crate::cipher::{Direction, transform};
use crate::codec::{decode, encode, utf8_text};
use crate::error::{Error, Result};
use crate::key::{IvMaterial, KeyMaterial, normalize_iv, normalize_key};
use crate::options::CipherOptions;
use crate::resolve::Resolution;

/// Encrypts `plaintext` (as UTF-8) and returns the ciphertext encoded as
/// `options.encoding`.
///
/// The IV is not part of the output; decrypting needs the same options.
///
/// ```
/// # fn main() -> aes_text::Result<()> {
/// use aes_text::{CipherOptions, decrypt, encrypt};
///
/// let opts = CipherOptions::new("0123456789abcdef", "abcdef0123456789");
/// let ct = encrypt("hello world", &opts)?;
/// assert_eq!(decrypt(&ct, &opts)?, "hello world");
/// # Ok(())
/// # }
/// ```
pub fn encrypt(plaintext: &str, options: &CipherOptions) -> Result<String> {
    if plaintext.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let ciphertext = run(Direction::Encrypt, plaintext.as_bytes(), options)?;
    encode(&ciphertext, options.encoding)
}

/// Decrypts `ciphertext` given as `options.encoding` text and returns the plaintext,
/// which must be valid UTF-8.
///
/// Only block modes can notice a wrong key, IV or mode (as DecryptionFailed). In
/// stream modes the result is garbage and usually fails UTF-8 validation with
/// InvalidEncoding.
pub fn decrypt(ciphertext: &str, options: &CipherOptions) -> Result<String> {
    if ciphertext.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    if options.key.is_empty() {
        return Err(Error::MissingKey);
    }
    let bytes = decode(ciphertext, options.encoding)?;
    utf8_text(run(Direction::Decrypt, &bytes, options)?)
}

/// Encrypts raw bytes. `options.encoding` is not used.
pub fn encrypt_bytes(plaintext: &[u8], options: &CipherOptions) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Err(Error::EmptyInput);
    }
    run(Direction::Encrypt, plaintext, options)
}

/// Decrypts raw bytes. `options.encoding` is not used.
pub fn decrypt_bytes(ciphertext: &[u8], options: &CipherOptions) -> Result<Vec<u8>> {
    if ciphertext.is_empty() {
        return Err(Error::EmptyInput);
    }
    run(Direction::Decrypt, ciphertext, options)
}

fn run(direction: Direction, input: &[u8], options: &CipherOptions) -> Result<Vec<u8>> {
    let (resolution, key, iv) = prepare(options)?;
    debug!(
        ?direction,
        mode = %resolution.mode,
        padding = %resolution.effective_padding(),
        key_size = %options.key_size,
        encoding = %options.encoding,
        len = input.len(),
        "running cipher"
    );

    transform(
        direction,
        input,
        &key,
        iv.as_ref(),
        resolution.mode,
        resolution.effective_padding(),
    )
}

fn prepare(options: &CipherOptions) -> Result<(Resolution, KeyMaterial, Option<IvMaterial>)> {
    if options.key.is_empty() {
        return Err(Error::MissingKey);
    }

    let resolution = Resolution::new(options.mode, options.padding);
    let key = normalize_key(&options.key, options.key_size)?;
    let iv = if resolution.iv_required {
        Some(normalize_iv(&options.iv, resolution.mode)?)
    } else {
        None
    };

    Ok((resolution, key, iv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeySize;
    use crate::options::{CipherMode, Encoding, PaddingMode};
    use proptest::prelude::*;

    const KEY: &str = "0123456789abcdef";
    const IV: &str = "abcdef0123456789";

    fn opts(mode: CipherMode) -> CipherOptions {
        CipherOptions::new(KEY, IV).with_mode(mode)
    }

    #[test]
    fn hello_world_cbc_base64() -> Result<()> {
        let opts = CipherOptions {
            mode: CipherMode::Cbc,
            padding: PaddingMode::Pkcs7,
            key_size: KeySize::Bits128,
            key: KEY.into(),
            iv: IV.into(),
            encoding: Encoding::Base64,
        };
        let ct = encrypt("hello world", &opts)?;
        assert_eq!(ct.len(), 24); // one block, base64
        assert_eq!(decrypt(&ct, &opts)?, "hello world");
        Ok(())
    }

    #[test]
    fn empty_input_is_rejected_first() {
        // even with no key, the empty payload is reported
        let opts = CipherOptions::default();
        assert!(matches!(encrypt("", &opts), Err(Error::EmptyInput)));
        assert!(matches!(encrypt("  \n\t", &opts), Err(Error::EmptyInput)));
        assert!(matches!(decrypt("", &opts), Err(Error::EmptyInput)));
        assert!(matches!(encrypt_bytes(b"", &opts), Err(Error::EmptyInput)));
    }

    #[test]
    fn missing_key() {
        let opts = CipherOptions::new("", IV);
        assert!(matches!(encrypt("x", &opts), Err(Error::MissingKey)));
        // checked before the ciphertext is decoded
        assert!(matches!(decrypt("not base64!", &opts), Err(Error::MissingKey)));
    }

    #[test]
    fn ecb_short_key() {
        let opts = CipherOptions::new("shortkey", "").with_mode(CipherMode::Ecb);
        assert!(matches!(
            encrypt("x", &opts),
            Err(Error::KeyTooShort {
                len: 8,
                required: 16
            })
        ));
    }

    #[test]
    fn ecb_needs_no_iv_but_others_do() -> Result<()> {
        let ecb = CipherOptions::new(KEY, "").with_mode(CipherMode::Ecb);
        let ct = encrypt("no iv needed", &ecb)?;
        assert_eq!(decrypt(&ct, &ecb)?, "no iv needed");

        for mode in [CipherMode::Cbc, CipherMode::Cfb, CipherMode::Ofb, CipherMode::Ctr] {
            let opts = CipherOptions::new(KEY, "").with_mode(mode);
            assert!(matches!(
                encrypt("needs iv", &opts),
                Err(Error::IvRequired { mode: m }) if m == mode
            ));
        }
        Ok(())
    }

    #[test]
    fn short_iv() {
        let opts = CipherOptions::new(KEY, "0123").with_mode(CipherMode::Ofb);
        assert!(matches!(
            encrypt("x", &opts),
            Err(Error::IvTooShort { len: 4 })
        ));
    }

    #[test]
    fn bad_ciphertext_encoding() {
        let opts = opts(CipherMode::Cbc).with_encoding(Encoding::Hex);
        assert!(matches!(
            decrypt("abc", &opts),
            Err(Error::InvalidEncoding {
                encoding: Encoding::Hex,
                ..
            })
        ));
    }

    #[test]
    fn wrong_key_fails_padding_check_in_block_modes() -> Result<()> {
        const MSG: &str = "attack at dawn, attack at dawn";
        for mode in [CipherMode::Cbc, CipherMode::Ecb] {
            let ct = encrypt(MSG, &opts(mode))?;
            let failed = (0..200)
                .filter(|i| {
                    let wrong = CipherOptions::new(format!("wrongkey{i:08}"), IV).with_mode(mode);
                    matches!(decrypt(&ct, &wrong), Err(Error::DecryptionFailed { .. }))
                })
                .count();
            // a false PKCS7 pass has probability about 1/256 per key
            assert!(failed >= 180, "{mode}: only {failed}/200 wrong keys rejected");
        }
        Ok(())
    }

    #[test]
    fn bytes_api_matches_text_api() -> Result<()> {
        let opts = opts(CipherMode::Ctr).with_encoding(Encoding::Hex);
        let raw = encrypt_bytes(b"some text", &opts)?;
        assert_eq!(hex::encode(&raw), encrypt("some text", &opts)?);
        assert_eq!(decrypt_bytes(&raw, &opts)?, b"some text");
        Ok(())
    }

    #[test]
    fn concurrent_calls_are_independent() {
        std::thread::scope(|s| {
            let handles: Vec<_> = CipherMode::ALL
                .into_iter()
                .map(|mode| {
                    s.spawn(move || -> Result<()> {
                        let opts = opts(mode);
                        for i in 0..50 {
                            let msg = format!("message {i} in {mode}");
                            assert_eq!(decrypt(&encrypt(&msg, &opts)?, &opts)?, msg);
                        }
                        Ok(())
                    })
                })
                .collect();
            for h in handles {
                h.join().expect("worker panicked").expect("roundtrip failed");
            }
        });
    }

    proptest! {
        #[test]
        fn key_truncation_matches_prefix(extra in "[a-zA-Z0-9]{1,24}", msg in "[ -~]{1,64}") {
            prop_assume!(!msg.trim().is_empty());
            for size in KeySize::ALL {
                let prefix: String = "K".repeat(size.bytes());
                let long = format!("{prefix}{extra}");
                let a = CipherOptions::new(prefix, IV).with_key_size(size);
                let b = CipherOptions::new(long, IV).with_key_size(size);
                prop_assert_eq!(encrypt(&msg, &a).unwrap(), encrypt(&msg, &b).unwrap());
            }
        }

        #[test]
        fn roundtrip_all_stream_modes(msg in "\\PC{1,80}") {
            prop_assume!(!msg.trim().is_empty());
            for mode in [CipherMode::Cfb, CipherMode::Ofb, CipherMode::Ctr] {
                for padding in PaddingMode::ALL {
                    let opts = opts(mode).with_padding(padding).with_key_size(KeySize::Bits128);
                    let ct = encrypt(&msg, &opts).unwrap();
                    prop_assert_eq!(decrypt(&ct, &opts).unwrap(), msg.clone());
                }
            }
        }
    }
}
