// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! 64-bit FNV-1a hash computing the feature of one chunk.

/// Hasher which computes the 64-bit FNV-1a hash.
///
/// Each chunk found by the [chunker](crate::internal_hashes::Chunker) is
/// reduced to one 64-bit feature by this hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aHash(u64);

impl Fnv1aHash {
    /// The FNV-1a 64-bit offset basis (the initial state).
    pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// The FNV 64-bit prime.
    pub const PRIME: u64 = 0x0000_0100_0000_01b3;

    /// Creates a new [`Fnv1aHash`] with the initial value.
    #[inline]
    pub fn new() -> Self {
        Fnv1aHash(Self::OFFSET_BASIS)
    }

    /// Updates the hash value by processing a byte.
    #[inline(always)]
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        self.0 ^= ch as u64;
        self.0 = self.0.wrapping_mul(Self::PRIME);
        self
    }

    /// Updates the hash value by processing a slice of [`u8`].
    #[inline]
    pub fn update(&mut self, buf: &[u8]) -> &mut Self {
        for &ch in buf {
            self.update_by_byte(ch);
        }
        self
    }

    /// Returns the current hash value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for Fnv1aHash {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the 64-bit FNV-1a hash of a byte slice.
#[inline]
pub fn fnv1a_64(buf: &[u8]) -> u64 {
    Fnv1aHash::new().update(buf).value()
}

mod tests;
