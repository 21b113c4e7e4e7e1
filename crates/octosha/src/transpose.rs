// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 8×8 word transpose between lane-major and word-major layouts.
//!
//! Lane-major: `m[lane][word]`, one row per independent hash.
//! Word-major: `m[word][lane]`, one row per vector register.

use crate::consts::LANES;

/// Eight rows of eight 32-bit words.
pub type LaneMatrix = [[u32; LANES]; LANES];

/// Transpose an 8×8 word matrix: `out[i][j] == lanes[j][i]`.
///
/// An involution, so the same call converts lane-major input to word-major
/// and back.
///
/// ```
/// use octosha::transpose;
///
/// let m: [[u32; 8]; 8] = core::array::from_fn(|i| core::array::from_fn(|j| (i * 8 + j) as u32));
/// let t = transpose(&m);
///
/// assert_eq!(t[2][5], m[5][2]);
/// assert_eq!(transpose(&t), m);
/// ```
pub fn transpose(lanes: &LaneMatrix) -> LaneMatrix {
    let mut out = *lanes;
    for i in 0..LANES {
        for j in (i + 1)..LANES {
            out[i][j] = lanes[j][i];
            out[j][i] = lanes[i][j];
        }
    }
    out
}
