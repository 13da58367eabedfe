use super::constants::{RCON, SBOX};
use super::util::xor_words;
use crate::key::KeyMaterial;

/// AES key schedule. Returns 11, 13, or 15 round keys for AES-128, AES-192, and
/// AES-256 respectively; the first round key is the original key.
pub fn expand_key(key: &KeyMaterial) -> Vec<[u8; 16]> {
    let key = key.as_bytes();

    // Variable names match FIPS-197: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   number of 32-bit words in the key
    // Nr   number of rounds (10, 12, 14)
    // Nw   total words produced, including the initial key
    let nk = key.len() / 4;
    let nr = nk + 6;
    let nw = (nr + 1) * 4;

    let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in nk..nw {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            // RotWord, SubWord, Rcon
            temp = [
                SBOX[temp[1] as usize] ^ RCON[i / nk],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
                SBOX[temp[0] as usize],
            ];
        } else if nk == 8 && i % nk == 4 {
            // AES-256 only
            temp = temp.map(|b| SBOX[b as usize]);
        }
        w[i] = xor_words(&temp, &w[i - nk]);
    }

    w.chunks_exact(4)
        .map(|words| {
            let mut round_key = [0u8; 16];
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(word);
            }
            round_key
        })
        .collect()
}
