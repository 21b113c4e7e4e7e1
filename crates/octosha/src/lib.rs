// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 per FIPS 180-4 with two execution modes over one compression function.
//!
//! - [`Sha256`]: streaming hasher, arbitrary input split across any number of
//!   `update` calls, Merkle–Damgård padding on `finalize`.
//! - [`transform8`]: 8-way lane-parallel block transform. Eight independent
//!   (state, block) pairs are transposed into word-major vectors, run through
//!   the 64 rounds together, and transposed back.
//!
//! ```
//! use octosha::Sha256;
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//!
//! let digest = hasher.finalize();
//! assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod batch;
mod compress;
mod consts;
mod digest;
mod error;
mod lanes;
mod sha256;
mod transpose;
mod word;

pub use batch::{digest_batch8, hash_batch8, hash_short8, try_hash_batch8};
pub use compress::transform;
pub use consts::{BLOCK_LEN, H0, HASH_LEN, LANES, MAX_SHORT_MESSAGE_LEN};
pub use digest::{Digest, encode};
pub use error::Sha256Error;
pub use lanes::{Backend, transform8, transform8_with};
pub use sha256::Sha256;
pub use transpose::{LaneMatrix, transpose};

/// Running hash value H(i): eight 32-bit words `a..h`.
pub type State = [u32; 8];

/// One 512-bit message block.
pub type Block = [u8; BLOCK_LEN];
