// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 8-way block transform.
//!
//! Eight (state, block) pairs are loaded lane-major, transposed so each
//! vector holds one word position across all lanes, compressed with the same
//! round code as the scalar transform, and transposed back. Lanes never mix
//! inside the rounds; only the two transposes move data between lanes.
//!
//! Backends:
//! - `Portable`: `[u32; 8]` lanes, any target
//! - `Avx2`: `__m256i` lanes, x86_64 with AVX2 (runtime-detected with `std`)

#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
pub(crate) mod avx2;
pub(crate) mod portable;

use crate::compress::{block_words, compress};
use crate::consts::LANES;
use crate::error::Sha256Error;
use crate::transpose::LaneMatrix;
use crate::word::Word;
use crate::{Block, State};

/// Eight 32-bit lanes that the round code can run on.
pub(crate) trait LaneVector: Word {
    /// Load one row (eight words) into a vector
    fn load(row: &[u32; LANES]) -> Self;

    /// Store a vector back into one row
    fn store(self) -> [u32; LANES];

    /// Transpose eight vectors as an 8×8 word matrix
    fn transpose8(rows: [Self; LANES]) -> [Self; LANES];
}

/// Load a lane-major matrix and transpose it into word-major vectors
#[inline(always)]
fn load_word_major<V: LaneVector>(rows: &LaneMatrix) -> [V; LANES] {
    let mut v = [V::splat(0); LANES];
    for (vi, row) in v.iter_mut().zip(rows.iter()) {
        *vi = V::load(row);
    }
    V::transpose8(v)
}

/// Shared driver for every backend
#[inline(always)]
pub(crate) fn transform8_lanes<V: LaneVector>(
    states: &[State; LANES],
    blocks: &[Block; LANES],
) -> [State; LANES] {
    // M(i) words 0..7 and 8..15, one row per lane
    let mut first = [[0u32; LANES]; LANES];
    let mut second = [[0u32; LANES]; LANES];
    for (lane, block) in blocks.iter().enumerate() {
        let m = block_words(block);
        first[lane].copy_from_slice(&m[..8]);
        second[lane].copy_from_slice(&m[8..]);
    }

    let mut m = [V::splat(0); 16];
    m[..8].copy_from_slice(&load_word_major::<V>(&first));
    m[8..].copy_from_slice(&load_word_major::<V>(&second));

    let mut h = load_word_major::<V>(states);
    compress(&mut h, &m);

    let h = V::transpose8(h);
    let mut out = [[0u32; 8]; LANES];
    for (state, v) in out.iter_mut().zip(h) {
        *state = v.store();
    }
    out
}

/// Implementation backing the 8-way transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Array-of-lanes implementation, available everywhere
    Portable,
    /// x86_64 AVX2 (`__m256i`) implementation
    Avx2,
}

impl Backend {
    /// Every backend, fastest first
    pub const ALL: [Backend; 2] = [Backend::Avx2, Backend::Portable];

    /// Fastest backend usable on this CPU and build.
    ///
    /// With the `std` feature AVX2 is detected at runtime; without it only a
    /// build with `target_feature = "avx2"` selects it. The `portable`
    /// feature always selects [`Backend::Portable`].
    pub fn detect() -> Self {
        Self::ALL
            .into_iter()
            .find(|backend| backend.is_available())
            .unwrap_or(Backend::Portable)
    }

    /// Whether this backend can run here
    pub fn is_available(self) -> bool {
        match self {
            Backend::Portable => true,
            Backend::Avx2 => avx2_available(),
        }
    }

    /// Stable lowercase name, for reports and benchmark labels
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Portable => "portable",
            Backend::Avx2 => "avx2",
        }
    }
}

#[cfg(all(target_arch = "x86_64", not(feature = "portable"), feature = "std"))]
fn avx2_available() -> bool {
    std::arch::is_x86_feature_detected!("avx2")
}

#[cfg(all(
    target_arch = "x86_64",
    not(feature = "portable"),
    not(feature = "std")
))]
fn avx2_available() -> bool {
    cfg!(target_feature = "avx2")
}

#[cfg(not(all(target_arch = "x86_64", not(feature = "portable"))))]
fn avx2_available() -> bool {
    false
}

/// 8-way block transform on a specific backend.
///
/// Lane `i` of the result equals `transform(&states[i], &blocks[i])`.
///
/// # Errors
///
/// [`Sha256Error::BackendUnavailable`] if `backend` cannot run on this CPU or
/// was compiled out.
pub fn transform8_with(
    backend: Backend,
    states: &[State; LANES],
    blocks: &[Block; LANES],
) -> Result<[State; LANES], Sha256Error> {
    match backend {
        Backend::Portable => Ok(portable::transform8(states, blocks)),
        #[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
        Backend::Avx2 if backend.is_available() => {
            // SAFETY: AVX2 support was confirmed by is_available()
            Ok(unsafe { avx2::transform8(states, blocks) })
        }
        Backend::Avx2 => Err(Sha256Error::BackendUnavailable(backend)),
    }
}

/// 8-way block transform on the fastest available backend.
///
/// Semantically eight independent scalar transforms:
/// `transform8(s, b)[i] == transform(&s[i], &b[i])` for every lane `i`.
///
/// ```
/// use octosha::{H0, transform, transform8};
///
/// let blocks: [[u8; 64]; 8] = core::array::from_fn(|lane| [lane as u8; 64]);
/// let states = [H0; 8];
///
/// let out = transform8(&states, &blocks);
/// for lane in 0..8 {
///     assert_eq!(out[lane], transform(&states[lane], &blocks[lane]));
/// }
/// ```
pub fn transform8(states: &[State; LANES], blocks: &[Block; LANES]) -> [State; LANES] {
    transform8_with(Backend::detect(), states, blocks)
        .unwrap_or_else(|_| portable::transform8(states, blocks))
}
