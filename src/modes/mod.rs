//! Modes of operation over the AES block transform, plus block-mode padding.
//! Every function here works on expanded round keys and a raw 16-byte IV.

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;
pub mod padding;
mod util;

pub use cbc::{cbc_decrypt, cbc_encrypt};
pub use cfb::{cfb_decrypt, cfb_encrypt};
pub use ctr::ctr_apply;
pub use ecb::{ecb_decrypt, ecb_encrypt};
pub use ofb::ofb_apply;
