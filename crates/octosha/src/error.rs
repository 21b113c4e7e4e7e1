// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::lanes::Backend;

/// SHA-256 engine error
///
/// The algorithm itself cannot fail; every variant is a caller-contract violation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// Strict update attempted on a finalized hasher that was not reset
    #[error("hasher was finalized; call reset() before feeding a new message")]
    InvalidState,

    /// Batch API received a number of inputs other than the lane count
    #[error("batch requires exactly {expected} lanes, got {actual}")]
    LaneCountMismatch {
        /// Lanes the 8-way transform needs
        expected: usize,
        /// Inputs supplied by the caller
        actual: usize,
    },

    /// Short-message batch input does not fit in one padded block
    #[error("message in lane {lane} is {len} bytes; single-block limit is {max}")]
    MessageTooLong {
        /// Offending lane index
        lane: usize,
        /// Its length in bytes
        len: usize,
        /// Maximum length that pads into one block
        max: usize,
    },

    /// Requested 8-way backend is not supported by this CPU or build
    #[error("8-way backend {} is not available on this CPU", .0.name())]
    BackendUnavailable(Backend),
}
