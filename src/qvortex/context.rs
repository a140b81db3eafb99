//! Streaming context: init / update / final, plus the one-shot
//! convenience wrapper used by both the safe API and [`crate::ffi`].
use zeroize::Zeroize;

use super::compress::compress;
use super::sbox::derive_sbox;
use super::{BLOCK_LEN, DIGEST_LEN, IV, STATE_WORDS};

/// Incremental Qvortex hashing context.
///
/// Owned by a single caller; there is no shared-state invariant and no
/// internal synchronization — concurrent `update`/`finalize` calls on the
/// *same* context are the caller's responsibility to avoid. Separate
/// contexts are fully independent.
#[derive(Zeroize)]
#[repr(C)]
pub struct Context {
    state: [u64; STATE_WORDS],
    sbox: [u8; 256],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Context {
    /// Derive the S-box from `key` (an empty slice selects the fixed
    /// default key) and reset all counters.
    pub fn new(key: &[u8]) -> Self {
        Context {
            state: IV,
            sbox: derive_sbox(key),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Absorb `data`, compressing whole blocks as they become available
    /// and buffering any remainder.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let need = BLOCK_LEN - self.buffer_len;
            let take = need.min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == BLOCK_LEN {
                let block = self.buffer;
                compress(&mut self.state, &self.sbox, &block);
                self.buffer_len = 0;
            } else {
                debug_assert!(data.is_empty());
                return;
            }
        }

        while data.len() >= BLOCK_LEN {
            let block: [u8; BLOCK_LEN] = data[..BLOCK_LEN].try_into().unwrap();
            compress(&mut self.state, &self.sbox, &block);
            data = &data[BLOCK_LEN..];
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }

    /// Pad the final block with a Merkle-Damgard-style length suffix,
    /// compress it, emit the 32-byte digest, and zero the entire context
    /// so key-derived material does not persist.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        self.buffer[self.buffer_len] = 0x80;
        let mut pos = self.buffer_len + 1;

        if pos > 56 {
            self.buffer[pos..BLOCK_LEN].fill(0);
            let block = self.buffer;
            compress(&mut self.state, &self.sbox, &block);
            self.buffer = [0u8; BLOCK_LEN];
            pos = 0;
        }
        self.buffer[pos..56].fill(0);

        let total_bits = self.total_len.wrapping_mul(8);
        self.buffer[56..64].copy_from_slice(&total_bits.to_le_bytes());

        let block = self.buffer;
        compress(&mut self.state, &self.sbox, &block);

        let mut out = [0u8; DIGEST_LEN];
        for (word_idx, word) in self.state[..4].iter().enumerate() {
            out[word_idx * 8..word_idx * 8 + 8].copy_from_slice(&word.to_le_bytes());
        }

        // `self` is consumed here; the explicit zeroize covers the case
        // where a caller holds a stack copy of intermediate bytes alive
        // longer than `self`'s drop glue would, and documents the invariant
        // independently of `Drop` semantics.
        self.zeroize();
        out
    }
}

/// One-shot hash: `init`, `update` once, `final`.
pub fn hash_once(data: &[u8], key: &[u8]) -> [u8; DIGEST_LEN] {
    let mut ctx = Context::new(key);
    ctx.update(data);
    ctx.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_32_byte_digest() {
        let digest = hash_once(&[], &[]);
        assert_eq!(digest.len(), DIGEST_LEN);
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(hash_once(b"Hello, Qvortex!", &[]), hash_once(b"Hello, Qvortex!", &[]));
    }

    #[test]
    fn key_changes_digest() {
        let unkeyed = hash_once(b"Hello, Qvortex!", &[]);
        let keyed = hash_once(b"Hello, Qvortex!", b"test key");
        assert_ne!(unkeyed, keyed);
    }

    #[test]
    fn streaming_matches_one_shot_for_various_splits() {
        let data: Vec<u8> = (0u32..300).map(|v| (v % 256) as u8).collect();
        let one_shot = hash_once(&data, b"split-key");

        let splits: &[&[usize]] = &[
            &[0, data.len()],
            &[1, data.len() - 1],
            &[63, data.len() - 63],
            &[64, data.len() - 64],
            &[65, data.len() - 65],
            &[7, 193, data.len() - 200],
        ];

        for split in splits {
            let mut ctx = Context::new(b"split-key");
            let mut offset = 0;
            for &len in *split {
                ctx.update(&data[offset..offset + len]);
                offset += len;
            }
            assert_eq!(offset, data.len());
            let streamed = ctx.finalize();
            assert_eq!(streamed, one_shot, "split {split:?} diverged");
        }
    }

    #[test]
    fn streaming_matches_one_shot_byte_at_a_time() {
        let data = b"Hello, Qvortex! This message is longer than one block.";
        let one_shot = hash_once(data, &[]);

        let mut ctx = Context::new(&[]);
        for byte in data {
            ctx.update(std::slice::from_ref(byte));
        }
        assert_eq!(ctx.finalize(), one_shot);
    }

    #[test]
    fn boundary_lengths_all_produce_32_byte_digests() {
        for len in [0usize, 1, 63, 64, 65, 127, 128, 129] {
            let data = vec![0xAB; len];
            let digest = hash_once(&data, &[]);
            assert_eq!(digest.len(), DIGEST_LEN, "len {len}");
        }
    }

    #[test]
    fn one_mib_input_produces_32_byte_digest() {
        let data = vec![0u8; 1024 * 1024];
        let digest = hash_once(&data, &[]);
        assert_eq!(digest.len(), DIGEST_LEN);
    }

    #[test]
    fn zero_block_input_digest_is_not_degenerate() {
        let data = vec![0u8; 1024];
        let digest = hash_once(&data, &[]);
        assert_ne!(digest, [0u8; DIGEST_LEN]);

        let weight: u32 = digest.iter().map(|b| b.count_ones()).sum();
        assert!(
            (192..=320).contains(&weight),
            "Hamming weight {weight} outside plausible [192, 320] range"
        );
    }

    #[test]
    fn one_bit_key_difference_changes_digest_substantially() {
        let data = vec![0u8; 256];
        let key_a = [0u8; 32];
        let mut key_b = key_a;
        key_b[0] ^= 0x01;

        let digest_a = hash_once(&data, &key_a);
        let digest_b = hash_once(&data, &key_b);
        assert_ne!(digest_a, digest_b);

        let distance: u32 = digest_a
            .iter()
            .zip(digest_b.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        // Not a hard cryptographic bound, just a sanity floor against a
        // mixer that barely reacts to the key at all.
        assert!(distance > 32, "Hamming distance {distance} implausibly low");
    }
}
