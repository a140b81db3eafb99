//! S-box derivation.
//!
//! The S-box is a 256-byte pseudorandom lookup table, keyed by an optional
//! caller-supplied key and otherwise by a fixed default. It is derived by
//! two chained SHAKE-128 calls: one to fold the (possibly empty) key down
//! to a fixed 32-byte seed, one to expand that seed to 256 S-box bytes.
//! It is *not* constrained to be a permutation of `0..255` — callers must
//! not "fix up" any collisions they observe.
use crate::shake::shake128;

/// Default key material absorbed when the caller supplies no key. The
/// default bytes are absorbed through SHAKE128 exactly like a real key
/// would be, not used directly as the seed.
const DEFAULT_KEY: [u8; 32] = [0xCC; 32];

/// Derive the 256-byte S-box for `key` (empty slice selects [`DEFAULT_KEY`]).
pub(crate) fn derive_sbox(key: &[u8]) -> [u8; 256] {
    let effective_key: &[u8] = if key.is_empty() { &DEFAULT_KEY } else { key };

    let mut seed = [0u8; 32];
    shake128(effective_key, &mut seed);

    let mut sbox = [0u8; 256];
    shake128(&seed, &mut sbox);
    sbox
}
