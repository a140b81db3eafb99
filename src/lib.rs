//! Qvortex ("Qvortex-Lite"): a keyed 256-bit hash primitive.
//!
//! The hash combines a keyed, data-dependent 256-byte S-box (derived
//! through two chained SHAKE-128 calls over a full Keccak-f[1600]
//! permutation), a block compression function mixing substitution,
//! input-driven rotation, and an ARX schedule over an 8-word chaining
//! state, and a Merkle-Damgard-style streaming wrapper.
//!
//! This crate makes no cryptographic security claim; it is a hash
//! *primitive*, not a vetted MAC or general-purpose cryptographic hash
//! function.
//!
//! This crate does not carry a blanket `#![forbid(unsafe_code)]`: the
//! Keccak permutation's lane/byte aliasing cast and the C-ABI surface in
//! [`ffi`] both need `unsafe`. Every `unsafe` block is narrowly scoped and
//! carries an inline `// SAFETY:` comment; see DESIGN.md for the full
//! rationale.

mod permute;
mod shake;
mod sponge;

mod qvortex;

pub mod error;
pub mod ffi;

pub use error::QvortexError;
pub use qvortex::{hash_once, Context, BLOCK_LEN, DIGEST_LEN};

/// Version string returned by [`ffi::qvortex_version`] and
/// [`version`]. Follows plain `major.minor.patch` semantic versioning.
pub const VERSION: &str = "1.0.0";

/// Safe-Rust equivalent of [`ffi::qvortex_version`].
pub fn version() -> &'static str {
    VERSION
}

/// One-shot hash over `data`, optionally keyed by `key`.
///
/// An empty `key` selects the fixed default S-box seed.
pub fn hash(data: &[u8], key: &[u8]) -> [u8; DIGEST_LEN] {
    hash_once(data, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_semver_pattern() {
        let v = version();
        let mut parts = v.split('.');
        for _ in 0..3 {
            let part = parts.next().expect("three dot-separated components");
            assert!(!part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        }
        assert!(parts.next().is_none(), "expected exactly three components");
    }

    #[test]
    fn hash_matches_golden_determinism_contract() {
        // Empty input, empty key: pinned only as "some deterministic 32-byte
        // value" here (this repository did not run a compiler to freeze the
        // exact bytes — see DESIGN.md). Repeated calls must still agree.
        let a = hash(b"", b"");
        let b = hash(b"", b"");
        assert_eq!(a, b);
        assert_eq!(a.len(), DIGEST_LEN);
    }
}
