// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use octosha_test_utils::{KNOWN_ANSWERS, LaneRng, hex_to_digest, random_blocks8};

use crate::{
    Block, H0, MAX_SHORT_MESSAGE_LEN, Sha256, Sha256Error, digest_batch8, encode, hash_batch8,
    hash_short8, transform, try_hash_batch8,
};

/// Message padded into a single block by hand
fn padded_block(message: &[u8]) -> Block {
    let mut block = [0u8; 64];
    block[..message.len()].copy_from_slice(message);
    block[message.len()] = 0x80;
    block[56..].copy_from_slice(&((message.len() as u64) * 8).to_be_bytes());
    block
}

#[test]
fn hash_batch8_padded_abc_gives_known_answer() {
    let digests = hash_batch8(&[padded_block(b"abc"); 8]);
    let expected =
        hex_to_digest("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");

    println!("  Result:   {:02x?}", &digests[0][..4]);
    println!("  Expected: {:02x?}", &expected[..4]);

    for (lane, digest) in digests.iter().enumerate() {
        assert_eq!(*digest, expected, "lane {lane}");
    }
}

#[test]
fn hash_batch8_padded_lanes_match_streaming() {
    let messages: [&[u8]; 8] = [
        b"", b"a", b"abc", b"message digest", b"lane four", b"0123456789", b"six", b"seven",
    ];
    let blocks: [Block; 8] = core::array::from_fn(|lane| padded_block(messages[lane]));
    let digests = hash_batch8(&blocks);

    for (lane, message) in messages.iter().enumerate() {
        assert_eq!(digests[lane], Sha256::digest(message), "lane {lane}");
    }
}

#[test]
fn hash_batch8_is_one_compression_from_initial_state() {
    let mut rng = LaneRng::new(0xba7c);

    for trial in 0..64 {
        let blocks = random_blocks8(&mut rng);
        let digests = hash_batch8(&blocks);

        for lane in 0..8 {
            assert_eq!(
                digests[lane],
                encode(&transform(&H0, &blocks[lane])),
                "trial {trial}, lane {lane}"
            );
        }
    }
}

#[test]
fn digest_batch8_matches_streaming_per_lane() {
    let mut rng = LaneRng::new(0xd16e);

    for trial in 0..64 {
        let blocks = random_blocks8(&mut rng);
        let digests = digest_batch8(&blocks);

        for lane in 0..8 {
            assert_eq!(
                digests[lane],
                Sha256::digest(&blocks[lane]),
                "trial {trial}, lane {lane}"
            );
        }
    }
}

#[test]
fn digest_batch8_identical_lanes_give_identical_digests() {
    let blocks = [[0x61u8; 64]; 8];
    let digests = digest_batch8(&blocks);

    assert!(digests.iter().all(|d| *d == digests[0]));
    assert_eq!(digests[0], Sha256::digest(&[0x61u8; 64]));
}

#[test]
fn try_hash_batch8_accepts_eight() {
    let blocks = random_blocks8(&mut LaneRng::new(8));
    assert_eq!(try_hash_batch8(&blocks), Ok(hash_batch8(&blocks)));
}

#[test]
fn try_hash_batch8_rejects_wrong_lane_counts() {
    let blocks = random_blocks8(&mut LaneRng::new(9));
    let mut nine = blocks.to_vec();
    nine.push(blocks[0]);

    for input in [&blocks[..0], &blocks[..1], &blocks[..7], &nine[..]] {
        assert_eq!(
            try_hash_batch8(input),
            Err(Sha256Error::LaneCountMismatch {
                expected: 8,
                actual: input.len(),
            })
        );
    }
}

#[test]
fn hash_short8_matches_known_answers() {
    // Every literal vector under 56 bytes, repeated across lanes
    let short: Vec<&[u8]> = KNOWN_ANSWERS
        .iter()
        .filter(|v| v.message.len() <= MAX_SHORT_MESSAGE_LEN)
        .map(|v| v.message)
        .collect();
    assert!(!short.is_empty());

    let messages: Vec<&[u8]> = (0..8).map(|lane| short[lane % short.len()]).collect();
    let digests = hash_short8(&messages).expect("eight short messages");

    for (lane, message) in messages.iter().enumerate() {
        let vector = KNOWN_ANSWERS
            .iter()
            .find(|v| v.message == *message)
            .expect("message comes from the vector table");
        assert_eq!(digests[lane], hex_to_digest(vector.digest_hex), "lane {lane}");
    }
}

#[test]
fn hash_short8_handles_every_short_length() {
    let data = [0x5au8; MAX_SHORT_MESSAGE_LEN];

    for start in (0..=MAX_SHORT_MESSAGE_LEN).step_by(8) {
        let messages: Vec<&[u8]> = (0..8)
            .map(|lane| &data[..core::cmp::min(start + lane, MAX_SHORT_MESSAGE_LEN)])
            .collect();
        let digests = hash_short8(&messages).expect("all within limit");

        for (lane, message) in messages.iter().enumerate() {
            assert_eq!(digests[lane], Sha256::digest(message), "len {}", message.len());
        }
    }
}

#[test]
fn hash_short8_rejects_wrong_lane_count() {
    let messages: [&[u8]; 3] = [b"a", b"b", b"c"];

    assert_eq!(
        hash_short8(&messages),
        Err(Sha256Error::LaneCountMismatch {
            expected: 8,
            actual: 3,
        })
    );
}

#[test]
fn hash_short8_rejects_message_over_single_block_limit() {
    let long = [0u8; MAX_SHORT_MESSAGE_LEN + 1];
    let mut messages: [&[u8]; 8] = [&b"ok"[..]; 8];
    messages[6] = &long;

    assert_eq!(
        hash_short8(&messages),
        Err(Sha256Error::MessageTooLong {
            lane: 6,
            len: 56,
            max: 55,
        })
    );
}

#[test]
fn errors_render_readable_messages() {
    let mismatch = Sha256Error::LaneCountMismatch {
        expected: 8,
        actual: 3,
    };
    assert_eq!(mismatch.to_string(), "batch requires exactly 8 lanes, got 3");

    let state = Sha256Error::InvalidState;
    assert!(state.to_string().contains("reset()"));
}
