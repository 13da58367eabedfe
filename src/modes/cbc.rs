use crate::core::{decrypt_block, encrypt_block};
use crate::key::BLOCK_LEN;
use crate::modes::util::{map_chunks, previous_block, to_block, xor_into};

/// Cipher block chaining encryption of block-aligned input. Each plaintext block is
/// XOR'd with the previous ciphertext block (the IV for the first) before encryption.
/// Inherently serial.
pub fn cbc_encrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; BLOCK_LEN]) -> Vec<u8> {
    debug_assert!(input.len() % BLOCK_LEN == 0, "CBC input must be padded");
    let mut output = Vec::with_capacity(input.len());
    let mut prev = *iv;

    for chunk in input.chunks_exact(BLOCK_LEN) {
        let mut block = [0u8; BLOCK_LEN];
        xor_into(&mut block, chunk, &prev);
        prev = encrypt_block(&block, round_keys);
        output.extend_from_slice(&prev);
    }

    output
}

/// Cipher block chaining decryption. Each block only depends on itself and the
/// previous ciphertext block, so this runs in parallel for large inputs.
pub fn cbc_decrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; BLOCK_LEN]) -> Vec<u8> {
    debug_assert!(input.len() % BLOCK_LEN == 0, "CBC ciphertext must be block-aligned");
    map_chunks(input, |i, chunk, out| {
        let decrypted = decrypt_block(&to_block(chunk), round_keys);
        xor_into(out, &decrypted, previous_block(input, iv, i));
    })
}
