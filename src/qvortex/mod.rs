//! The Qvortex hash primitive: a data-dependent S-box, an ARX block
//! compression function, and a Merkle-Damgard-style streaming wrapper
//! around it. See the submodules for the derivation, compression, and
//! streaming logic respectively.

mod compress;
mod context;
mod sbox;

pub use context::{hash_once, Context};

/// Size, in bytes, of a Qvortex digest. Fixed; there is no variable-length
/// output mode.
pub const DIGEST_LEN: usize = 32;

/// Size, in bytes, of a Qvortex compression block.
pub const BLOCK_LEN: usize = 64;

/// Number of 64-bit words in the Qvortex chaining state.
pub const STATE_WORDS: usize = 8;

/// Fixed initial chaining value, little-endian words.
pub(crate) const IV: [u64; STATE_WORDS] = [
    0x6A09E667F3BCC908,
    0xBB67AE8584CAA73B,
    0x3C6EF372FE94F82B,
    0xA54FF53A5F1D36F1,
    0x510E527FADE682D1,
    0x9B05688C2B3E6C1F,
    0x1F83D9ABFB41BD6B,
    0x5BE0CD19137E2179,
];
