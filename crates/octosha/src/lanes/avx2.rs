// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AVX2 8-lane backend: one `__m256i` per word position.
//!
//! `Avx2Lanes` is private and only created inside `#[target_feature(enable = "avx2")]`
//! unsafe functions, which callers reach after confirming AVX2 support. The trait
//! methods below inline into those functions, so every intrinsic executes
//! with AVX2 known to be present.

use core::arch::x86_64::*;

use crate::consts::LANES;
use crate::word::Word;
use crate::{Block, State};

use super::LaneVector;

/// Eight `u32` lanes in one AVX2 register.
///
/// Private to this module: values exist only inside the
/// `#[target_feature(enable = "avx2")]` functions below, and must never be
/// built anywhere else, since the safe trait methods run AVX2 intrinsics.
#[derive(Clone, Copy)]
#[repr(transparent)]
struct Avx2Lanes(__m256i);

impl Word for Avx2Lanes {
    #[inline(always)]
    fn splat(value: u32) -> Self {
        // SAFETY: see module docs
        Self(unsafe { _mm256_set1_epi32(value as i32) })
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        // SAFETY: see module docs
        Self(unsafe { _mm256_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        // SAFETY: see module docs
        Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        // SAFETY: see module docs
        Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        // SAFETY: see module docs
        Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        // ROTR^n(x) = (x >> n) | (x << (32 - n)); n is always in 1..32
        // SAFETY: see module docs
        Self(unsafe {
            _mm256_or_si256(
                _mm256_srl_epi32(self.0, _mm_cvtsi32_si128(n as i32)),
                _mm256_sll_epi32(self.0, _mm_cvtsi32_si128((32 - n) as i32)),
            )
        })
    }

    #[inline(always)]
    fn shift_right(self, n: u32) -> Self {
        // SAFETY: see module docs
        Self(unsafe { _mm256_srl_epi32(self.0, _mm_cvtsi32_si128(n as i32)) })
    }
}

impl LaneVector for Avx2Lanes {
    #[inline(always)]
    fn load(row: &[u32; LANES]) -> Self {
        // SAFETY: row is 32 readable bytes; loadu has no alignment requirement
        Self(unsafe { _mm256_loadu_si256(row.as_ptr() as *const __m256i) })
    }

    #[inline(always)]
    fn store(self) -> [u32; LANES] {
        let mut row = [0u32; LANES];
        // SAFETY: row is 32 writable bytes; storeu has no alignment requirement
        unsafe { _mm256_storeu_si256(row.as_mut_ptr() as *mut __m256i, self.0) };
        row
    }

    /// In-register 8×8 transpose.
    ///
    /// Rows A..H in, columns out:
    /// 1. unpack 32-bit pairs:  [A0 B0 A1 B1 | A4 B4 A5 B5], ...
    /// 2. unpack 64-bit pairs:  [A0 B0 C0 D0 | A4 B4 C4 D4], ...
    /// 3. swap 128-bit halves:  [A0 B0 C0 D0 E0 F0 G0 H0], ...
    #[inline(always)]
    fn transpose8(rows: [Self; LANES]) -> [Self; LANES] {
        let [a, b, c, d, e, f, g, h] = rows.map(|v| v.0);

        // SAFETY: see module docs
        unsafe {
            let ab_lo = _mm256_unpacklo_epi32(a, b);
            let ab_hi = _mm256_unpackhi_epi32(a, b);
            let cd_lo = _mm256_unpacklo_epi32(c, d);
            let cd_hi = _mm256_unpackhi_epi32(c, d);
            let ef_lo = _mm256_unpacklo_epi32(e, f);
            let ef_hi = _mm256_unpackhi_epi32(e, f);
            let gh_lo = _mm256_unpacklo_epi32(g, h);
            let gh_hi = _mm256_unpackhi_epi32(g, h);

            // [A0 B0 C0 D0 | A4 B4 C4 D4] and friends
            let abcd_0 = _mm256_unpacklo_epi64(ab_lo, cd_lo);
            let abcd_1 = _mm256_unpackhi_epi64(ab_lo, cd_lo);
            let abcd_2 = _mm256_unpacklo_epi64(ab_hi, cd_hi);
            let abcd_3 = _mm256_unpackhi_epi64(ab_hi, cd_hi);
            let efgh_0 = _mm256_unpacklo_epi64(ef_lo, gh_lo);
            let efgh_1 = _mm256_unpackhi_epi64(ef_lo, gh_lo);
            let efgh_2 = _mm256_unpacklo_epi64(ef_hi, gh_hi);
            let efgh_3 = _mm256_unpackhi_epi64(ef_hi, gh_hi);

            // 0x20: low halves of both inputs, 0x31: high halves
            [
                Self(_mm256_permute2x128_si256(abcd_0, efgh_0, 0x20)),
                Self(_mm256_permute2x128_si256(abcd_1, efgh_1, 0x20)),
                Self(_mm256_permute2x128_si256(abcd_2, efgh_2, 0x20)),
                Self(_mm256_permute2x128_si256(abcd_3, efgh_3, 0x20)),
                Self(_mm256_permute2x128_si256(abcd_0, efgh_0, 0x31)),
                Self(_mm256_permute2x128_si256(abcd_1, efgh_1, 0x31)),
                Self(_mm256_permute2x128_si256(abcd_2, efgh_2, 0x31)),
                Self(_mm256_permute2x128_si256(abcd_3, efgh_3, 0x31)),
            ]
        }
    }
}

/// 8-way transform with AVX2 lanes.
///
/// # Safety
///
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn transform8(
    states: &[State; LANES],
    blocks: &[Block; LANES],
) -> [State; LANES] {
    super::transform8_lanes::<Avx2Lanes>(states, blocks)
}

/// In-register transpose of a lane matrix, exposed for tests.
///
/// # Safety
///
/// The CPU must support AVX2.
#[cfg(test)]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn transpose(m: &crate::LaneMatrix) -> crate::LaneMatrix {
    let mut rows = [Avx2Lanes::splat(0); LANES];
    for (v, row) in rows.iter_mut().zip(m.iter()) {
        *v = Avx2Lanes::load(row);
    }

    let mut out = [[0u32; LANES]; LANES];
    for (row, v) in out.iter_mut().zip(Avx2Lanes::transpose8(rows)) {
        *row = v.store();
    }
    out
}

/// Round functions evaluated lane-wise in AVX2 registers, exposed for tests.
///
/// Returns `[Ch, Maj, Σ0, Σ1, σ0, σ1]` of `(x, y, z)` per lane.
///
/// # Safety
///
/// The CPU must support AVX2.
#[cfg(test)]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn round_functions(
    x: &[u32; LANES],
    y: &[u32; LANES],
    z: &[u32; LANES],
) -> [[u32; LANES]; 6] {
    use crate::word::{bsig0, bsig1, ch, maj, ssig0, ssig1};

    let (x, y, z) = (Avx2Lanes::load(x), Avx2Lanes::load(y), Avx2Lanes::load(z));
    [
        ch(x, y, z).store(),
        maj(x, y, z).store(),
        bsig0(x).store(),
        bsig1(x).store(),
        ssig0(x).store(),
        ssig1(x).store(),
    ]
}
