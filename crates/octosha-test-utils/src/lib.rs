// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for octosha crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod random;
mod vectors;

pub use random::{LaneRng, random_block, random_blocks8, random_lane_matrix, random_states8};
pub use vectors::{KNOWN_ANSWERS, KnownAnswer, MILLION_A_HEX, hex_to_bytes, hex_to_digest};
