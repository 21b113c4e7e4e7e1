// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for full SHA-256 with padding
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] NIST SHA-256 Examples PDF
//     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf

use octosha_test_utils::{KNOWN_ANSWERS, MILLION_A_HEX, hex_to_digest};

use crate::Sha256;

#[test]
fn test_sha256_hash_empty() {
    // Expected: e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
    let expected = [
        0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9,
        0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52,
        0xb8, 0x55,
    ];

    let digest = Sha256::new().finalize();

    println!("SHA-256(''):");
    println!("  Result:   {:02x?}", digest);
    println!("  Expected: {:02x?}", expected);

    assert_eq!(digest, expected, "SHA-256 hash mismatch for empty message");
}

#[test]
fn test_sha256_hash_abc() {
    // Expected: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
    let expected = [
        0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
        0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
        0x15, 0xad,
    ];

    let mut hasher = Sha256::new();
    hasher.update(b"abc");
    let digest = hasher.finalize();

    println!("SHA-256('abc'):");
    println!("  Result:   {:02x?}", digest);
    println!("  Expected: {:02x?}", expected);

    assert_eq!(digest, expected, "SHA-256 hash mismatch for 'abc'");
}

#[test]
fn test_sha256_known_answers() {
    for vector in KNOWN_ANSWERS {
        let expected = hex_to_digest(vector.digest_hex);
        let digest = Sha256::digest(vector.message);

        assert_eq!(digest, expected, "SHA-256 mismatch for vector {}", vector.name);
    }
}

#[test]
fn test_sha256_million_a() {
    // FIPS 180-4 long message, fed in uneven slices
    let chunk = [b'a'; 1000];
    let mut hasher = Sha256::new();
    let mut fed = 0usize;
    let mut step = 1usize;

    while fed < 1_000_000 {
        let n = core::cmp::min(step, 1_000_000 - fed);
        hasher.update(&chunk[..n]);
        fed += n;
        step = step % 997 + 3;
    }

    assert_eq!(hasher.finalize(), hex_to_digest(MILLION_A_HEX));
}

#[test]
fn test_sha256_million_a_one_call() {
    let message = vec![b'a'; 1_000_000];
    assert_eq!(Sha256::digest(&message), hex_to_digest(MILLION_A_HEX));
}
