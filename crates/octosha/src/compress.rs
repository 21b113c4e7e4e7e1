// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression function per RFC 6234 Section 6.2.2

use crate::consts::K256;
use crate::word::{Word, bsig0, bsig1, ch, maj, ssig0, ssig1};
use crate::{Block, State};

/// Compress one block into `h`, generic over the word representation.
///
/// `m` holds the block's sixteen big-endian words M(i). The scalar transform
/// instantiates this with `u32`, the 8-way transform with a lane vector.
#[inline(always)]
pub(crate) fn compress<W: Word>(h: &mut [W; 8], m: &[W; 16]) {
    // Step 1: Prepare message schedule W[0..63]
    let mut w = [W::splat(0); 64];
    w[..16].copy_from_slice(m);

    // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    // Step 2: Initialize working variables with H(i-1)
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

    // Step 3: 64 rounds
    for (k, wt) in K256.iter().zip(w.iter()) {
        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(W::splat(*k))
            .wrapping_add(*wt);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (hi, v) in h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
        *hi = hi.wrapping_add(v);
    }
}

/// Load a block as sixteen big-endian words
#[inline(always)]
pub(crate) fn block_words(block: &Block) -> [u32; 16] {
    let mut m = [0u32; 16];
    for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    m
}

/// SHA-256 block transform (single block, scalar)
///
/// Returns H(i) for H(i-1) = `state` and message block `block`. Pure: no
/// allocation, no shared mutable state.
///
/// ```
/// use octosha::{H0, transform};
///
/// // "abc" padded into one block (FIPS 180-4 Appendix B.1)
/// let mut block = [0u8; 64];
/// block[..3].copy_from_slice(b"abc");
/// block[3] = 0x80;
/// block[63] = 0x18;
///
/// assert_eq!(transform(&H0, &block)[0], 0xba7816bf);
/// ```
pub fn transform(state: &State, block: &Block) -> State {
    let mut h = *state;
    compress(&mut h, &block_words(block));
    h
}
