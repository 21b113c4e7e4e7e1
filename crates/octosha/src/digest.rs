// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest encoding: H(N) to the 32-byte big-endian output, plus a hex view.

use alloc::string::String;
use core::fmt;

use crate::State;
use crate::consts::HASH_LEN;

/// Serialize a state as the SHA-256 digest (each word most-significant byte first)
///
/// ```
/// use octosha::encode;
///
/// let digest = encode(&[0x01020304, 0, 0, 0, 0, 0, 0, 0xa0b0c0d0]);
/// assert_eq!(digest[..4], [0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(digest[28..], [0xa0, 0xb0, 0xc0, 0xd0]);
/// ```
pub fn encode(state: &State) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// A 32-byte SHA-256 digest with a lowercase-hex view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; HASH_LEN]);

impl Digest {
    /// Digest of a final state
    pub fn from_state(state: &State) -> Self {
        Self(encode(state))
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";

        let mut s = String::with_capacity(HASH_LEN * 2);
        for byte in &self.0 {
            s.push(char::from(HEX[usize::from(byte >> 4)]));
            s.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
        s
    }
}

impl From<[u8; HASH_LEN]> for Digest {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; HASH_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
