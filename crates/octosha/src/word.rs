// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word - the arithmetic the SHA-256 rounds are written against.
//!
//! Implemented by `u32` for the scalar transform and by the 8-lane vector
//! types in [`crate::lanes`]. Every operation is lane-wise, so a formula that
//! is correct for `u32` is correct for each lane of a vector.

/// 32-bit word, or a vector of independent 32-bit lanes.
pub(crate) trait Word: Copy {
    /// Broadcast a constant into every lane
    fn splat(value: u32) -> Self;

    /// self + rhs (mod 2^32, per lane)
    fn wrapping_add(self, rhs: Self) -> Self;

    /// self ^ rhs
    fn xor(self, rhs: Self) -> Self;

    /// self & rhs
    fn and(self, rhs: Self) -> Self;

    /// self | rhs
    fn or(self, rhs: Self) -> Self;

    /// ROTR^n(self)
    fn rotate_right(self, n: u32) -> Self;

    /// SHR^n(self)
    fn shift_right(self, n: u32) -> Self;
}

impl Word for u32 {
    #[inline(always)]
    fn splat(value: u32) -> Self {
        value
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        u32::rotate_right(self, n)
    }

    #[inline(always)]
    fn shift_right(self, n: u32) -> Self {
        self >> n
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-256 functions per RFC 6234 Section 5.1
// ═══════════════════════════════════════════════════════════════════════════════

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
///
/// Computed as z ⊕ (x ∧ (y ⊕ z)), which needs no NOT.
#[inline(always)]
pub(crate) fn ch<W: Word>(x: W, y: W, z: W) -> W {
    z.xor(x.and(y.xor(z)))
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
///
/// Computed as (x ∧ y) ∨ (z ∧ (x ∨ y)).
#[inline(always)]
pub(crate) fn maj<W: Word>(x: W, y: W, z: W) -> W {
    x.and(y).or(z.and(x.or(y)))
}

/// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
#[inline(always)]
pub(crate) fn bsig0<W: Word>(x: W) -> W {
    x.rotate_right(2)
        .xor(x.rotate_right(13))
        .xor(x.rotate_right(22))
}

/// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
#[inline(always)]
pub(crate) fn bsig1<W: Word>(x: W) -> W {
    x.rotate_right(6)
        .xor(x.rotate_right(11))
        .xor(x.rotate_right(25))
}

/// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
#[inline(always)]
pub(crate) fn ssig0<W: Word>(x: W) -> W {
    x.rotate_right(7)
        .xor(x.rotate_right(18))
        .xor(x.shift_right(3))
}

/// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
#[inline(always)]
pub(crate) fn ssig1<W: Word>(x: W) -> W {
    x.rotate_right(17)
        .xor(x.rotate_right(19))
        .xor(x.shift_right(10))
}
