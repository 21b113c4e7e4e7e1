// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 streaming hasher per RFC 6234 Section 6.2

use crate::compress::transform;
use crate::consts::{BLOCK_LEN, H0, HASH_LEN, LENGTH_OFFSET};
use crate::digest::encode;
use crate::error::Sha256Error;
use crate::{Block, State};

/// Lifecycle of the message currently being hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing fed since construction or reset
    Empty,
    /// At least one update since construction or reset
    Buffering,
    /// `finalize` ran and nothing was fed after it
    Finalized,
}

/// SHA-256 streaming state.
///
/// Input is buffered into 64-byte blocks; each full block goes through the
/// scalar [`transform`](crate::transform). `finalize` pads, emits the digest
/// and resets the hasher, so one instance can hash many messages in turn.
///
/// Reuse after `finalize`:
/// - [`update`](Self::update) starts the next message transparently.
/// - [`try_update`](Self::try_update) refuses with
///   [`Sha256Error::InvalidState`] until [`reset`](Self::reset) is called.
#[derive(Debug, Clone)]
pub struct Sha256 {
    // Hash state H(i)
    h: State,

    // Input buffering, buffer_len < BLOCK_LEN between calls
    buffer: Block,
    buffer_len: usize,

    // Bits already passed through the transform (buffer excluded)
    bit_len: u64,

    phase: Phase,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// Create new SHA-256 state initialized with H(0)
    pub const fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            bit_len: 0,
            phase: Phase::Empty,
        }
    }

    /// Hash a complete message in one call
    ///
    /// ```
    /// use octosha::Sha256;
    ///
    /// let digest = Sha256::digest(b"");
    /// assert_eq!(digest[..4], [0xe3, 0xb0, 0xc4, 0x42]);
    /// ```
    pub fn digest(data: &[u8]) -> [u8; HASH_LEN] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Whether `finalize` ran and no input has been fed since
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Whether the message in progress has no input yet.
    ///
    /// True after `new`, `reset` and `finalize`; empty updates leave it set.
    pub fn is_empty(&self) -> bool {
        self.phase != Phase::Buffering
    }

    /// Compress one block into H
    fn compress_block(&mut self, block: &Block) {
        self.h = transform(&self.h, block);
        self.bit_len = self.bit_len.wrapping_add((BLOCK_LEN * 8) as u64);
    }

    /// Compress the internal buffer and empty it
    fn compress_buffer(&mut self) {
        let block = self.buffer;
        self.compress_block(&block);
        self.buffer.fill(0);
        self.buffer_len = 0;
    }

    /// Update state with data
    ///
    /// Never fails. On a finalized hasher this begins a new message, the
    /// hasher having already been reset by `finalize`.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.phase = Phase::Buffering;

        let mut offset = 0;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                self.compress_buffer();
            }
        }

        // Process full blocks straight from the input
        let mut blocks = data[offset..].chunks_exact(BLOCK_LEN);
        for chunk in blocks.by_ref() {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            self.compress_block(&block);
        }

        // Buffer remaining
        let remainder = blocks.remainder();
        if !remainder.is_empty() {
            self.buffer[..remainder.len()].copy_from_slice(remainder);
            self.buffer_len = remainder.len();
        }
    }

    /// Strict update: rejects input after `finalize` until `reset`.
    ///
    /// # Errors
    ///
    /// [`Sha256Error::InvalidState`] if the hasher is finalized. The hasher
    /// is left untouched.
    pub fn try_update(&mut self, data: &[u8]) -> Result<(), Sha256Error> {
        if self.is_finalized() {
            return Err(Sha256Error::InvalidState);
        }
        self.update(data);
        Ok(())
    }

    /// Finalize and output hash, then reset to H(0)
    pub fn finalize(&mut self) -> [u8; HASH_LEN] {
        // Padding per RFC 6234 Section 4.1
        let bit_len = self
            .bit_len
            .wrapping_add((self.buffer_len as u64).wrapping_mul(8));

        // Append 0x80 (1 bit followed by zeros)
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room for the 64-bit length: pad this block out and spill
        if self.buffer_len > LENGTH_OFFSET {
            self.buffer[self.buffer_len..].fill(0);
            self.compress_buffer();
        }

        // Pad with zeros up to length field
        self.buffer[self.buffer_len..LENGTH_OFFSET].fill(0);

        // Append 64-bit length in big-endian
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        self.compress_buffer();

        // Output hash H(N)
        let out = encode(&self.h);

        self.reset();
        self.phase = Phase::Finalized;

        out
    }

    /// Reset to H(0) for reuse, discarding any buffered input
    pub fn reset(&mut self) {
        self.h = H0;
        self.buffer.fill(0);
        self.buffer_len = 0;
        self.bit_len = 0;
        self.phase = Phase::Empty;
    }

    /// Bytes currently buffered (always < 64)
    #[cfg(test)]
    pub(crate) fn buffered(&self) -> usize {
        self.buffer_len
    }

    /// Bits already compressed (buffer excluded)
    #[cfg(test)]
    pub(crate) fn compressed_bits(&self) -> u64 {
        self.bit_len
    }

    /// Current chaining value
    #[cfg(test)]
    pub(crate) fn state(&self) -> State {
        self.h
    }
}
