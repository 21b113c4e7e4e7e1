// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use octosha_test_utils::{LaneRng, random_lane_matrix};
use proptest::prelude::*;

use crate::consts::LANES;
use crate::lanes::LaneVector;
use crate::lanes::portable::U32x8;
use crate::{LaneMatrix, transpose};

fn numbered() -> LaneMatrix {
    core::array::from_fn(|i| core::array::from_fn(|j| (i * 8 + j) as u32))
}

#[test]
fn transpose_moves_every_index() {
    let m = numbered();
    let t = transpose(&m);

    for i in 0..LANES {
        for j in 0..LANES {
            assert_eq!(t[i][j], m[j][i], "t[{i}][{j}] != m[{j}][{i}]");
        }
    }
}

#[test]
fn transpose_keeps_diagonal() {
    let m = numbered();
    let t = transpose(&m);

    for i in 0..LANES {
        assert_eq!(t[i][i], m[i][i]);
    }
}

#[test]
fn portable_lanes_transpose_matches_matrix_transpose() {
    let mut rng = LaneRng::new(0x7a_05e);

    for _ in 0..64 {
        let m = random_lane_matrix(&mut rng);
        let rows = m.map(U32x8);
        let t = U32x8::transpose8(rows).map(|v| v.store());

        assert_eq!(t, transpose(&m));
    }
}

#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
#[test]
fn avx2_transpose_matches_matrix_transpose() {
    use crate::Backend;

    if !Backend::Avx2.is_available() {
        println!("AVX2 not available, skipping");
        return;
    }

    let mut rng = LaneRng::new(0xa7_2);
    for _ in 0..256 {
        let m = random_lane_matrix(&mut rng);

        // SAFETY: AVX2 support checked above
        let t = unsafe { crate::lanes::avx2::transpose(&m) };
        assert_eq!(t, transpose(&m));

        // SAFETY: AVX2 support checked above
        let back = unsafe { crate::lanes::avx2::transpose(&t) };
        assert_eq!(back, m, "AVX2 transpose is not an involution");
    }
}

proptest! {
    #[test]
    fn transpose_is_an_involution(m in any::<[[u32; 8]; 8]>()) {
        prop_assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn transpose_row_becomes_column(m in any::<[[u32; 8]; 8]>(), row in 0..LANES) {
        let t = transpose(&m);
        for col in 0..LANES {
            prop_assert_eq!(t[col][row], m[row][col]);
        }
    }
}
