use crate::core::encrypt_block;
use crate::key::BLOCK_LEN;
use crate::modes::util::xor_into;

/// Output feedback encryption and decryption (OFB is symmetric). The keystream is the
/// IV encrypted repeatedly and never depends on the data, so it is computed serially.
pub fn ofb_apply(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; BLOCK_LEN]) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];
    let mut keystream = *iv;

    for (in_chunk, out_chunk) in input.chunks(BLOCK_LEN).zip(output.chunks_mut(BLOCK_LEN)) {
        keystream = encrypt_block(&keystream, round_keys);
        xor_into(out_chunk, in_chunk, &keystream);
    }

    output
}
