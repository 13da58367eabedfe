use crate::core::encrypt_block;
use crate::key::BLOCK_LEN;
use crate::modes::util::{map_chunks, previous_block, to_block, xor_into};

/// Full-block cipher feedback (CFB-128) encryption. The keystream block is the
/// encryption of the previous ciphertext block (the IV for the first); a short final
/// chunk uses a truncated keystream, so output length equals input length.
pub fn cfb_encrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; BLOCK_LEN]) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];
    let mut feedback = *iv;

    for (in_chunk, out_chunk) in input.chunks(BLOCK_LEN).zip(output.chunks_mut(BLOCK_LEN)) {
        let keystream = encrypt_block(&feedback, round_keys);
        xor_into(out_chunk, in_chunk, &keystream);
        if out_chunk.len() == BLOCK_LEN {
            feedback = to_block(out_chunk);
        }
    }

    output
}

/// CFB-128 decryption. The keystream only depends on ciphertext, so large inputs are
/// decrypted in parallel.
pub fn cfb_decrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; BLOCK_LEN]) -> Vec<u8> {
    map_chunks(input, |i, chunk, out| {
        let keystream = encrypt_block(&to_block(previous_block(input, iv, i)), round_keys);
        xor_into(out, chunk, &keystream);
    })
}
