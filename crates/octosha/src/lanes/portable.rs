// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Portable 8-lane backend: plain arrays, lane-wise loops the compiler can
//! auto-vectorize.

use crate::consts::LANES;
use crate::transpose::transpose;
use crate::word::Word;
use crate::{Block, State};

use super::LaneVector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(align(32))]
pub(crate) struct U32x8(pub(crate) [u32; LANES]);

impl U32x8 {
    #[inline(always)]
    fn zip_with(self, rhs: Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let mut out = [0u32; LANES];
        for ((o, a), b) in out.iter_mut().zip(self.0).zip(rhs.0) {
            *o = op(a, b);
        }
        Self(out)
    }

    #[inline(always)]
    fn each(self, op: impl Fn(u32) -> u32) -> Self {
        let mut out = self.0;
        for o in out.iter_mut() {
            *o = op(*o);
        }
        Self(out)
    }
}

impl Word for U32x8 {
    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self([value; LANES])
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        self.zip_with(rhs, u32::wrapping_add)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a ^ b)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a & b)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a | b)
    }

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        self.each(|a| a.rotate_right(n))
    }

    #[inline(always)]
    fn shift_right(self, n: u32) -> Self {
        self.each(|a| a >> n)
    }
}

impl LaneVector for U32x8 {
    #[inline(always)]
    fn load(row: &[u32; LANES]) -> Self {
        Self(*row)
    }

    #[inline(always)]
    fn store(self) -> [u32; LANES] {
        self.0
    }

    #[inline(always)]
    fn transpose8(rows: [Self; LANES]) -> [Self; LANES] {
        let t = transpose(&rows.map(|v| v.0));
        t.map(Self)
    }
}

pub(crate) fn transform8(states: &[State; LANES], blocks: &[Block; LANES]) -> [State; LANES] {
    super::transform8_lanes::<U32x8>(states, blocks)
}
