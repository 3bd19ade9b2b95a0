// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Fixed-size Bloom filter forming one segment of a digest.

use crate::macros::invariant;
use crate::params::{FILTER_SIZE, MASK, MAX_BLOCKS, SHIFT_OPS, SUBHASHES};

/// One segment of a [`Digest`](crate::Digest): a Bloom filter of
/// [`FILTER_BITS`](crate::params::FILTER_BITS) bits.
///
/// A feature (the 64-bit hash of a chunk) sets [`SUBHASHES`] bits, each
/// addressed by an 11-bit slice of the hash.  The filter also counts how
/// many features it absorbed.  A feature whose bits were all set already
/// contributes nothing and is not counted (a large number of those hints
/// a saturated filter or crafted input).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BloomFilter {
    /// The bit array (bit `n` is the bit `n % 8` of the byte `n / 8`).
    bits: [u8; FILTER_SIZE],

    /// The number of absorbed features (up to [`MAX_BLOCKS`] when built by
    /// a [`Digest`](crate::Digest)).
    blocks: u32,
}

impl BloomFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        BloomFilter {
            bits: [0; FILTER_SIZE],
            blocks: 0,
        }
    }

    /// Creates a filter from its raw bit array and absorbed feature count.
    pub fn from_raw(bits: [u8; FILTER_SIZE], blocks: u32) -> Self {
        BloomFilter { bits, blocks }
    }

    /// Returns the raw bit array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; FILTER_SIZE] {
        &self.bits
    }

    /// Returns the number of absorbed features.
    #[inline]
    pub fn blocks(&self) -> u32 {
        self.blocks
    }

    /// Returns whether the filter has absorbed [`MAX_BLOCKS`] features.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.blocks >= MAX_BLOCKS
    }

    /// Returns the bit positions a feature hash maps to.
    #[inline]
    pub fn bit_positions(hash: u64) -> [usize; SUBHASHES] {
        let mut positions = [0usize; SUBHASHES];
        for (j, position) in positions.iter_mut().enumerate() {
            *position = ((hash >> (SHIFT_OPS * j)) & MASK) as usize;
        }
        positions
    }

    /// Adds a feature hash to the filter.
    ///
    /// Returns whether the feature was counted.  If all of its bits were
    /// already set, nothing changes and the feature is not counted.
    pub fn add_hash(&mut self, hash: u64) -> bool {
        let mut already_set = 0;
        for position in Self::bit_positions(hash) {
            let (byte_pos, bit_pos) = (position >> 3, position & 7);
            invariant!(byte_pos < FILTER_SIZE);
            if (self.bits[byte_pos] >> bit_pos) & 1 == 1 {
                already_set += 1;
            }
            self.bits[byte_pos] |= 1 << bit_pos;
        }
        if already_set == SUBHASHES {
            return false;
        }
        self.blocks += 1;
        true
    }

    /// Tests whether all bits of a feature hash are set.
    ///
    /// Like every Bloom filter, this may return false positives.
    pub fn may_contain(&self, hash: u64) -> bool {
        Self::bit_positions(hash)
            .iter()
            .all(|&position| (self.bits[position >> 3] >> (position & 7)) & 1 == 1)
    }

    /// Counts the bits set to one (the Hamming weight of the filter).
    pub fn count_ones(&self) -> u32 {
        self.bits
            .chunks_exact(4)
            .map(|word| u32::from_ne_bytes([word[0], word[1], word[2], word[3]]).count_ones())
            .sum()
    }

    /// Counts the bits set to one in both filters.
    ///
    /// This estimates the number of features shared by both filters.
    pub fn common_bits(&self, other: &Self) -> u32 {
        self.bits
            .chunks_exact(4)
            .zip(other.bits.chunks_exact(4))
            .map(|(a, b)| {
                let a = u32::from_ne_bytes([a[0], a[1], a[2], a[3]]);
                let b = u32::from_ne_bytes([b[0], b[1], b[2], b[3]]);
                (a & b).count_ones()
            })
            .sum()
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BloomFilter")
            .field("blocks", &self.blocks)
            .field("ones", &self.count_ones())
            .field("bits", &hex::encode(self.bits))
            .finish()
    }
}
