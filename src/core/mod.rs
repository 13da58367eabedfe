//! AES block transform (FIPS-197): key schedule plus single-block encryption and
//! decryption. State is a 16-byte array in column-major order, which is the same order
//! as the input bytes.

pub mod constants;
mod decryption;
mod encryption;
mod schedule;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use schedule::expand_key;
