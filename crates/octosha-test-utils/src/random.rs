// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seeded random fixtures: the same seed always yields the same inputs, so a
//! failing lane can be replayed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic generator for blocks, states and lane matrices.
pub struct LaneRng(StdRng);

impl LaneRng {
    /// Generator seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Next random 32-bit word
    pub fn word(&mut self) -> u32 {
        self.0.random()
    }

    /// Fill a byte buffer
    pub fn fill(&mut self, bytes: &mut [u8]) {
        self.0.fill(bytes);
    }

    /// Random length in `0..max`
    pub fn len_below(&mut self, max: usize) -> usize {
        self.0.random_range(0..max)
    }
}

/// One random 64-byte block
pub fn random_block(rng: &mut LaneRng) -> [u8; 64] {
    let mut block = [0u8; 64];
    rng.fill(&mut block);
    block
}

/// Eight independent random blocks
pub fn random_blocks8(rng: &mut LaneRng) -> [[u8; 64]; 8] {
    core::array::from_fn(|_| random_block(rng))
}

/// Eight arbitrary (not necessarily reachable) chaining states
pub fn random_states8(rng: &mut LaneRng) -> [[u32; 8]; 8] {
    random_lane_matrix(rng)
}

/// Random 8×8 word matrix
pub fn random_lane_matrix(rng: &mut LaneRng) -> [[u32; 8]; 8] {
    core::array::from_fn(|_| core::array::from_fn(|_| rng.word()))
}
