//! KECCAK Sponge construction with incremental API.
//!
//! Generic over the rate (in bytes) and the domain-separation suffix that is
//! XORed in before the final padding bit, per FIPS 202 §B.2. Qvortex only
//! ever instantiates this at `RATE_BYTES = 168` (SHAKE-128) with
//! `DELIMETED_SUFFIX = 0x1F`.
use crate::permute::State;

/// Absorb bytes into the Keccakf[1600] state.
pub(crate) struct Absorb<const RATE_BYTES: usize> {
    pos: usize,
    state: State<RATE_BYTES>,
}

impl<const RATE_BYTES: usize> Absorb<RATE_BYTES> {
    pub(crate) fn new() -> Self {
        Self {
            state: State::new(),
            pos: 0,
        }
    }

    pub(crate) fn absorb(&mut self, msg: &[u8]) {
        // first, we handle a potentially partial block, either due to and advanced
        // position or msg.len() < RATE_BYTES
        let partial_block_len = (RATE_BYTES - self.pos).min(msg.len());
        let (first_msg, rest_msg) = msg.split_at(partial_block_len);
        xor_bytes(&mut self.state.bytes_mut()[self.pos..], first_msg);
        // if the state was filled, we permute and reset the position
        if self.pos + partial_block_len == RATE_BYTES {
            self.state.keccakf_1600_permute();
            self.pos = 0;
        } else {
            // otherwise, we increment the position.
            self.pos += partial_block_len;
            // this branch is only taken if self.pos + partial_block_len < RATE_BYTES, so
            // we know that rest_msg.is_empty() and can safely return
            debug_assert!(rest_msg.is_empty());
            return;
        }

        // Absorb the remaining message
        let (chunks, rest) = rest_msg.as_chunks::<RATE_BYTES>();
        for chunk in chunks {
            xor_bytes(self.state.bytes_mut(), chunk);
            self.state.keccakf_1600_permute();
        }
        self.pos = rest.len();
        xor_bytes(self.state.bytes_mut(), rest);
    }

    /// Add domain separator and padding and turn into [`Squeeze`].
    ///
    /// Note that this performs no permute! Contrary to to FIPS202, we define
    /// the squeezing phase to start with a permutation (instead of ending
    /// the absorption with a permutation).
    pub(crate) fn into_squeeze<const DELIMETED_SUFFIX: u8>(mut self) -> Squeeze<RATE_BYTES> {
        let state_bytes = self.state.bytes_mut();
        state_bytes[self.pos] ^= DELIMETED_SUFFIX;
        state_bytes[RATE_BYTES - 1] ^= 0b10000000_u8;
        Squeeze::new(self.state)
    }
}

/// Squeeze bytes from the Keccakf[1600] state.
pub(crate) struct Squeeze<const RATE_BYTES: usize> {
    pos: usize,
    state: State<RATE_BYTES>,
}

impl<const RATE_BYTES: usize> Squeeze<RATE_BYTES> {
    fn new(state: State<RATE_BYTES>) -> Self {
        Self { pos: 0, state }
    }

    pub(crate) fn squeeze(&mut self, output: &mut [u8]) {
        if output.is_empty() {
            return;
        }

        if self.pos == 0 {
            self.state.keccakf_1600_permute();
        }
        let partial_block_len = (RATE_BYTES - self.pos).min(output.len());
        let (first_output, rest_output) = output.split_at_mut(partial_block_len);
        first_output.copy_from_slice(&self.state.bytes()[self.pos..self.pos + partial_block_len]);
        self.pos = (self.pos + partial_block_len) % RATE_BYTES;
        if rest_output.is_empty() {
            return;
        }

        let (chunks, rest) = rest_output.as_chunks_mut::<RATE_BYTES>();
        for chunk in chunks {
            self.state.keccakf_1600_permute();
            chunk.copy_from_slice(&self.state.bytes()[..RATE_BYTES]);
        }
        self.pos = rest.len();
        rest.copy_from_slice(&self.state.bytes()[..self.pos]);
    }
}

fn xor_bytes(dest: &mut [u8], other: &[u8]) {
    // for_each combinator can lead to better codegen
    dest.iter_mut().zip(other).for_each(|(state, input)| {
        *state ^= input;
    });
}
