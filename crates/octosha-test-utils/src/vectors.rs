// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Known-answer vectors for SHA-256
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] NIST SHA-256 Examples PDF
//     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf
// [3] RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//     https://www.rfc-editor.org/rfc/rfc6234.html#section-8.5

/// One message with its expected digest
pub struct KnownAnswer {
    /// Short label for assertion messages
    pub name: &'static str,
    /// Message bytes
    pub message: &'static [u8],
    /// Expected digest, lowercase hex
    pub digest_hex: &'static str,
}

/// FIPS 180-4 / RFC 6234 vectors that fit in memory as literals
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: b"",
        digest_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        message: b"abc",
        digest_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        // 56 bytes: padding spills into a second block
        name: "two-block-56",
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        digest_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "two-block-112",
        message: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        digest_hex: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "quick-brown-fox",
        message: b"The quick brown fox jumps over the lazy dog",
        digest_hex: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
];

/// Digest of one million repetitions of `'a'` (FIPS 180-4 long message)
pub const MILLION_A_HEX: &str = "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0";

/// Decode a hex string. Panics on odd length or non-hex characters.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string: {hex:?}");

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let s = core::str::from_utf8(pair).expect("hex must be ASCII");
            u8::from_str_radix(s, 16).expect("invalid hex digit")
        })
        .collect()
}

/// Decode a 64-character hex digest
pub fn hex_to_digest(hex: &str) -> [u8; 32] {
    hex_to_bytes(hex)
        .try_into()
        .expect("digest hex must decode to 32 bytes")
}
