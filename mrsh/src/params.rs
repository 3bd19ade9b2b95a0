// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Fixed parameters of the mrsh-v2 similarity digest.
//!
//! All digests generated or parsed by this crate share these parameters.
//! Changing any of them produces digests which are not comparable with
//! digests created by other mrsh-v2 implementations.

/// The window size of the rolling hash (in bytes).
pub const ROLLING_WINDOW: usize = 7;

/// The expected (average) distance between two chunk boundaries.
///
/// A chunk boundary is triggered when the rolling hash value `v` satisfies
/// `v % BLOCK_SIZE == BLOCK_SIZE - 1`.
pub const BLOCK_SIZE: u32 = 64;

/// The number of bytes skipped by the rolling hash after a chunk boundary.
///
/// Skipped bytes are not fed to the rolling hash but still belong to the
/// next chunk.
pub const SKIPPED_BYTES: usize = (BLOCK_SIZE / 4) as usize;

/// The size of a Bloom filter (a digest segment) in bytes.
pub const FILTER_SIZE: usize = 256;

/// The size of a Bloom filter in bits.
pub const FILTER_BITS: usize = FILTER_SIZE * 8;

/// The number of bit positions derived from one 64-bit feature hash.
pub const SUBHASHES: usize = 5;

/// The distance (in bits) between two sub-hashes inside a feature hash.
pub const SHIFT_OPS: usize = 11;

/// The mask to extract a bit position from a shifted feature hash.
pub const MASK: u64 = 0x7ff;

/// The maximum number of chunks a Bloom filter absorbs before a new one
/// is started.
pub const MAX_BLOCKS: u32 = 160;

/// The minimum number of chunks for a Bloom filter to be considered
/// on comparison.
///
/// Filters with fewer absorbed chunks are unreliable.
pub const MIN_BLOCKS: u32 = 8;

/// The probability that one specific bit is *not* set by one bit-set event.
///
/// This is (approximately) `1 - 1 / FILTER_BITS`.
pub const PROBABILITY: f64 = 0.99951172;

/// The maximum length of a digest name in bytes.
///
/// The name field of the mrsh-v2 command-line tool is 200 bytes including
/// the terminating NUL character.
pub const MAX_NAME_LEN: usize = 199;

/// Constant assertions related to this module.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::{const_assert, const_assert_eq};

    // Every masked sub-hash addresses exactly one bit of the filter.
    const_assert_eq!(MASK + 1, FILTER_BITS as u64);
    // All sub-hashes fit in a 64-bit feature hash.
    const_assert!(SHIFT_OPS * SUBHASHES <= 64);
    const_assert!((1u64 << SHIFT_OPS) - 1 == MASK);
    // Filters are counted 4 bytes at a time.
    const_assert_eq!(FILTER_SIZE % 4, 0);
    const_assert!(MIN_BLOCKS <= MAX_BLOCKS);
    const_assert!(MAX_BLOCKS <= u16::MAX as u32);
    const_assert!(SKIPPED_BYTES < BLOCK_SIZE as usize);
    const_assert!(BLOCK_SIZE.is_power_of_two());
}
