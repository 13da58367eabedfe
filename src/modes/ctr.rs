use crate::core::encrypt_block;
use crate::key::BLOCK_LEN;
use crate::modes::util::{map_chunks, xor_into};

/// Counter block `i`: the IV read as a 128-bit big-endian integer plus `i`, wrapping.
#[inline(always)]
pub(crate) fn ctr_block(iv: &[u8; BLOCK_LEN], i: usize) -> [u8; BLOCK_LEN] {
    u128::from_be_bytes(*iv).wrapping_add(i as u128).to_be_bytes()
}

/// Counter mode encryption and decryption (CTR is symmetric). Every keystream block is
/// independent, so large inputs are processed in parallel.
pub fn ctr_apply(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; BLOCK_LEN]) -> Vec<u8> {
    map_chunks(input, |i, chunk, out| {
        let keystream = encrypt_block(&ctr_block(iv, i), round_keys);
        xor_into(out, chunk, &keystream);
    })
}
