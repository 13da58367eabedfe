use super::constants::SBOX;
use super::util::{add_round_key, dbl};

/// Encrypts one 16-byte block with an expanded key schedule of 11, 13 or 15 round keys.
#[inline(always)]
pub fn encrypt_block(plaintext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *plaintext;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..last] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // final round has no MixColumns
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last]);

    state
}

#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// Row `r` rotates left by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// Each column is multiplied by the fixed matrix
/// [ 2  3  1  1 ]
/// | 1  2  3  1 |
/// | 1  1  2  3 |
/// [ 3  1  1  2 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (col[0], col[1], col[2], col[3]);
        col[0] = dbl(a ^ b) ^ b ^ c ^ d; /* 2a + 3b + c + d */
        col[1] = dbl(b ^ c) ^ c ^ d ^ a; /* 2b + 3c + d + a */
        col[2] = dbl(c ^ d) ^ d ^ a ^ b; /* 2c + 3d + a + b */
        col[3] = dbl(d ^ a) ^ a ^ b ^ c; /* 2d + 3a + b + c */
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expand_key;
    use crate::error::Result;
    use crate::key::KeyMaterial;

    const PLAINTEXT: [u8; 16] = [
        0x6B, 0xC1, 0xBE, 0xE2, 0x2E, 0x40, 0x9F, 0x96, //
        0xE9, 0x3D, 0x7E, 0x11, 0x73, 0x93, 0x17, 0x2A, //
    ];

    fn encrypt_with(key: &[u8]) -> Result<[u8; 16]> {
        let key = KeyMaterial::try_from_slice(key)?;
        Ok(encrypt_block(&PLAINTEXT, &expand_key(&key)))
    }

    #[test]
    fn test_mix_columns() {
        // test cases from https://en.wikipedia.org/wiki/Rijndael_MixColumns
        let mut state: [u8; 16] = [
            0x63, 0x47, 0xa2, 0xf0, // col 0
            0xf2, 0x0a, 0x22, 0x5c, // col 1
            0x01, 0x01, 0x01, 0x01, // col 2
            0xc6, 0xc6, 0xc6, 0xc6, // col 3
        ];

        mix_columns(&mut state);

        assert_eq!(
            state,
            [
                0x5d, 0xe0, 0x70, 0xbb, //
                0x9f, 0xdc, 0x58, 0x9d, //
                0x01, 0x01, 0x01, 0x01, //
                0xc6, 0xc6, 0xc6, 0xc6, //
            ]
        );
    }

    #[test]
    fn test_shift_rows() {
        let mut state: [u8; 16] = std::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    // block vectors from https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core128.pdf
    // (and the 192/256 equivalents)
    #[test]
    fn test_encrypt_block_128() -> Result<()> {
        let key = [
            0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, //
            0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F, 0x3C, //
        ];
        let expected = [
            0x3A, 0xD7, 0x7B, 0xB4, 0x0D, 0x7A, 0x36, 0x60, //
            0xA8, 0x9E, 0xCA, 0xF3, 0x24, 0x66, 0xEF, 0x97, //
        ];
        assert_eq!(encrypt_with(&key)?, expected, "incorrect AES-128 block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_192() -> Result<()> {
        let key = [
            0x8E, 0x73, 0xB0, 0xF7, 0xDA, 0x0E, 0x64, 0x52, //
            0xC8, 0x10, 0xF3, 0x2B, 0x80, 0x90, 0x79, 0xE5, //
            0x62, 0xF8, 0xEA, 0xD2, 0x52, 0x2C, 0x6B, 0x7B, //
        ];
        let expected = [
            0xBD, 0x33, 0x4F, 0x1D, 0x6E, 0x45, 0xF2, 0x5F, //
            0xF7, 0x12, 0xA2, 0x14, 0x57, 0x1F, 0xA5, 0xCC, //
        ];
        assert_eq!(encrypt_with(&key)?, expected, "incorrect AES-192 block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_256() -> Result<()> {
        let key = [
            0x60, 0x3D, 0xEB, 0x10, 0x15, 0xCA, 0x71, 0xBE, //
            0x2B, 0x73, 0xAE, 0xF0, 0x85, 0x7D, 0x77, 0x81, //
            0x1F, 0x35, 0x2C, 0x07, 0x3B, 0x61, 0x08, 0xD7, //
            0x2D, 0x98, 0x10, 0xA3, 0x09, 0x14, 0xDF, 0xF4, //
        ];
        let expected = [
            0xF3, 0xEE, 0xD1, 0xBD, 0xB5, 0xD2, 0xA0, 0x3C, //
            0x06, 0x4B, 0x5A, 0x7E, 0x3D, 0xB1, 0x81, 0xF8, //
        ];
        assert_eq!(encrypt_with(&key)?, expected, "incorrect AES-256 block");
        Ok(())
    }
}
