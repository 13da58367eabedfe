//! Substitution boxes and round constants. The S-box is computed at compile time from
//! its definition (multiplicative inverse in GF(2^8) followed by the affine map).

/// Forward S-box.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box, `SBOX_INV[SBOX[x]] == x`.
pub const SBOX_INV: [u8; 256] = invert(&SBOX);

/// Round constants, indexed from 1. AES-128 uses up to `RCON[10]`.
pub const RCON: [u8; 11] = [
    0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36,
];

const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    p
}

// a^254 == a^-1 in GF(2^8); 0 maps to 0
const fn gf_inv(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }
    if a == 0 { 0 } else { result }
}

const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = gf_inv(i as u8);
        sbox[i] = b
            ^ b.rotate_left(1)
            ^ b.rotate_left(2)
            ^ b.rotate_left(3)
            ^ b.rotate_left(4)
            ^ 0x63;
        i += 1;
    }
    sbox
}

const fn invert(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_known_entries() {
        // FIPS-197 figure 7
        assert_eq!(SBOX[0x00], 0x63);
        assert_eq!(SBOX[0x01], 0x7c);
        assert_eq!(SBOX[0x53], 0xed);
        assert_eq!(SBOX[0xff], 0x16);
        assert_eq!(SBOX_INV[0x63], 0x00);
        assert_eq!(SBOX_INV[0xed], 0x53);
    }

    #[test]
    fn sbox_is_a_permutation() {
        for x in 0..=255u8 {
            assert_eq!(SBOX_INV[SBOX[x as usize] as usize], x);
        }
    }
}
