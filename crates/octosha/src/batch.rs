// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot batch hashing over the 8-way transform.
//!
//! Each lane holds one message. [`hash_batch8`] takes blocks the caller has
//! already padded; [`hash_short8`] and [`digest_batch8`] pad per lane
//! themselves.

use crate::consts::{BLOCK_LEN, H0, HASH_LEN, LANES, LENGTH_OFFSET, MAX_SHORT_MESSAGE_LEN};
use crate::digest::encode;
use crate::error::Sha256Error;
use crate::lanes::transform8;
use crate::{Block, State};

/// Final padding block for a message of exactly one block (512 bits).
const FULL_BLOCK_PADDING: Block = {
    let mut block = [0u8; BLOCK_LEN];
    block[0] = 0x80;
    let len = ((BLOCK_LEN * 8) as u64).to_be_bytes();
    let mut i = 0;
    while i < 8 {
        block[LENGTH_OFFSET + i] = len[i];
        i += 1;
    }
    block
};

fn encode_lanes(states: &[State; LANES]) -> [[u8; HASH_LEN]; LANES] {
    let mut out = [[0u8; HASH_LEN]; LANES];
    for (digest, state) in out.iter_mut().zip(states) {
        *digest = encode(state);
    }
    out
}

/// One 8-way compression of eight caller-padded blocks from H(0).
///
/// Each block must already carry its message's padding (`0x80`, zeros and
/// the big-endian bit length), so lane `i` is the digest of a message that
/// fits in one block. Messages that span several blocks are padded and
/// chunked per lane by the caller and driven through [`transform8`].
///
/// ```
/// use octosha::{Sha256, hash_batch8};
///
/// let mut block = [0u8; 64];
/// block[..3].copy_from_slice(b"abc");
/// block[3] = 0x80;
/// block[63] = 24;
///
/// let digests = hash_batch8(&[block; 8]);
/// assert_eq!(digests[5], Sha256::digest(b"abc"));
/// ```
pub fn hash_batch8(blocks: &[Block; LANES]) -> [[u8; HASH_LEN]; LANES] {
    encode_lanes(&transform8(&[H0; LANES], blocks))
}

/// [`hash_batch8`] over a slice, checking the lane count first.
///
/// # Errors
///
/// [`Sha256Error::LaneCountMismatch`] unless `blocks.len() == 8`. No
/// transform runs in that case.
pub fn try_hash_batch8(blocks: &[Block]) -> Result<[[u8; HASH_LEN]; LANES], Sha256Error> {
    let blocks: &[Block; LANES] = blocks
        .try_into()
        .map_err(|_| Sha256Error::LaneCountMismatch {
            expected: LANES,
            actual: blocks.len(),
        })?;

    Ok(hash_batch8(blocks))
}

/// SHA-256 of eight independent, unpadded 64-byte messages.
///
/// Two 8-way transforms: one over the messages, one over the shared padding
/// block. Lane `i` equals `Sha256::digest(&blocks[i])`.
///
/// ```
/// use octosha::{Sha256, digest_batch8};
///
/// let blocks: [[u8; 64]; 8] = core::array::from_fn(|lane| [b'a' + lane as u8; 64]);
/// let digests = digest_batch8(&blocks);
///
/// assert_eq!(digests[3], Sha256::digest(&blocks[3]));
/// ```
pub fn digest_batch8(blocks: &[Block; LANES]) -> [[u8; HASH_LEN]; LANES] {
    let states = transform8(&[H0; LANES], blocks);
    let states = transform8(&states, &[FULL_BLOCK_PADDING; LANES]);
    encode_lanes(&states)
}

/// SHA-256 of eight short messages (at most 55 bytes each).
///
/// Every message pads into a single block, so the whole batch is one 8-way
/// transform.
///
/// # Errors
///
/// - [`Sha256Error::LaneCountMismatch`] unless exactly 8 messages are given
/// - [`Sha256Error::MessageTooLong`] for the first message over 55 bytes
///
/// Both are checked before any transform runs.
pub fn hash_short8(messages: &[&[u8]]) -> Result<[[u8; HASH_LEN]; LANES], Sha256Error> {
    if messages.len() != LANES {
        return Err(Sha256Error::LaneCountMismatch {
            expected: LANES,
            actual: messages.len(),
        });
    }

    let mut blocks = [[0u8; BLOCK_LEN]; LANES];
    for (lane, (block, message)) in blocks.iter_mut().zip(messages).enumerate() {
        if message.len() > MAX_SHORT_MESSAGE_LEN {
            return Err(Sha256Error::MessageTooLong {
                lane,
                len: message.len(),
                max: MAX_SHORT_MESSAGE_LEN,
            });
        }

        block[..message.len()].copy_from_slice(message);
        block[message.len()] = 0x80;
        let bit_len = (message.len() as u64) * 8;
        block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
    }

    Ok(hash_batch8(&blocks))
}
