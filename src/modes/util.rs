use rayon::prelude::*;

use crate::key::BLOCK_LEN;

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process in parallel if input size gt 4 KiB

/// Copies a full 16-byte chunk into a block. Callers only pass chunks from
/// `chunks_exact(16)` or block-aligned `chunks(16)`.
#[inline(always)]
pub(crate) fn to_block(chunk: &[u8]) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    block.copy_from_slice(chunk);
    block
}

/// `out[i] = a[i] ^ b[i]` over the length of `out`.
#[inline(always)]
pub(crate) fn xor_into(out: &mut [u8], a: &[u8], b: &[u8]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x ^ y;
    }
}

/// The ciphertext block preceding chunk `i`, or the IV for the first chunk. Used by
/// the modes whose decryption only depends on the previous ciphertext block.
#[inline(always)]
pub(crate) fn previous_block<'a>(input: &'a [u8], iv: &'a [u8; BLOCK_LEN], i: usize) -> &'a [u8] {
    if i == 0 {
        iv
    } else {
        &input[(i - 1) * BLOCK_LEN..i * BLOCK_LEN]
    }
}

/// Runs `f(index, in_chunk, out_chunk)` over each 16-byte chunk of `input` (the last
/// chunk may be shorter). Chunks are independent, so inputs over
/// [`PARALLEL_THRESHOLD`] are processed with rayon.
pub(crate) fn map_chunks<F>(input: &[u8], f: F) -> Vec<u8>
where
    F: Fn(usize, &[u8], &mut [u8]) + Sync + Send,
{
    let mut output = vec![0u8; input.len()];

    if input.len() > PARALLEL_THRESHOLD {
        output
            .par_chunks_mut(BLOCK_LEN)
            .zip(input.par_chunks(BLOCK_LEN))
            .enumerate()
            .for_each(|(i, (out_chunk, in_chunk))| f(i, in_chunk, out_chunk));
    } else {
        for (i, (out_chunk, in_chunk)) in output
            .chunks_mut(BLOCK_LEN)
            .zip(input.chunks(BLOCK_LEN))
            .enumerate()
        {
            f(i, in_chunk, out_chunk);
        }
    }

    output
}
