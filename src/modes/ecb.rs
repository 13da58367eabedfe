use crate::core::{decrypt_block, encrypt_block};
use crate::modes::util::{map_chunks, to_block};

/// Electronic codebook encryption of block-aligned (already padded) input. Each block
/// is encrypted independently, so identical plaintext blocks give identical ciphertext.
pub fn ecb_encrypt(input: &[u8], round_keys: &[[u8; 16]]) -> Vec<u8> {
    debug_assert!(input.len() % 16 == 0, "ECB input must be padded");
    map_chunks(input, |_, block, out| {
        out.copy_from_slice(&encrypt_block(&to_block(block), round_keys));
    })
}

/// Electronic codebook decryption of block-aligned input. Padding is left in place.
pub fn ecb_decrypt(input: &[u8], round_keys: &[[u8; 16]]) -> Vec<u8> {
    debug_assert!(input.len() % 16 == 0, "ECB ciphertext must be block-aligned");
    map_chunks(input, |_, block, out| {
        out.copy_from_slice(&decrypt_block(&to_block(block), round_keys));
    })
}
