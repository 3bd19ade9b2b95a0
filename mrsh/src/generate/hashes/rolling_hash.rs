// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright Andrew Tridgell <tridge@samba.org> 2002
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! A 32-bit rolling hash deciding chunk boundaries.

use crate::macros::invariant;
use crate::params::ROLLING_WINDOW;

/// Hasher which computes the rolling checksum over the last
/// [`WINDOW_SIZE`](Self::WINDOW_SIZE) bytes.
///
/// This is an Adler/rsync-style rolling checksum extended with a
/// shift-xor component.  The value only depends on the bytes currently
/// inside the window so that a chunk boundary is decided by local content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    /// Position inside [`window`](Self::window) to be overwritten next.
    index: u32,

    /// Plain sum of the bytes inside the window.
    sum: u32,

    /// Weighted sum of the bytes inside the window.
    ///
    /// The latest byte has a weight of [`WINDOW_SIZE`](Self::WINDOW_SIZE)
    /// and the oldest one has a weight of 1.
    weighted_sum: u32,

    /// Shift-xor accumulator.
    ///
    /// Left-shifted by [`MIX_LSHIFT`](Self::MIX_LSHIFT) and xor-ed with the
    /// latest byte.  Bytes older than the window are shifted out.
    mix: u32,

    /// The last [`WINDOW_SIZE`](Self::WINDOW_SIZE) bytes.
    window: [u8; ROLLING_WINDOW],
}

impl RollingHash {
    /// The window size of the rolling hash.
    pub const WINDOW_SIZE: usize = ROLLING_WINDOW;

    /// Left shift width of [`mix`](Self::mix) for each byte.
    pub(crate) const MIX_LSHIFT: u32 = 5;

    /// Creates a new [`RollingHash`] with the initial value.
    pub fn new() -> Self {
        RollingHash {
            index: 0,
            sum: 0,
            weighted_sum: 0,
            mix: 0,
            window: [0; ROLLING_WINDOW],
        }
    }

    /// Updates the hash value by processing a byte.
    #[inline]
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        invariant!((self.index as usize) < Self::WINDOW_SIZE);
        let ch = ch as u32;
        self.weighted_sum = self
            .weighted_sum
            .wrapping_sub(self.sum)
            .wrapping_add((ROLLING_WINDOW as u32).wrapping_mul(ch));
        self.sum = self
            .sum
            .wrapping_add(ch)
            .wrapping_sub(self.window[self.index as usize] as u32);
        self.window[self.index as usize] = ch as u8;
        self.index += 1;
        if self.index as usize == ROLLING_WINDOW {
            self.index = 0;
        }
        self.mix = (self.mix << Self::MIX_LSHIFT) ^ ch;
        self
    }

    /// Updates the hash value by processing a slice of [`u8`].
    pub fn update(&mut self, buf: &[u8]) -> &mut Self {
        for &ch in buf {
            self.update_by_byte(ch);
        }
        self
    }

    /// Returns the current hash value.
    ///
    /// This is the wrapping sum of the three accumulators.
    /// There is no finalization; updating may continue after reading.
    #[inline]
    pub fn value(&self) -> u32 {
        self.sum
            .wrapping_add(self.weighted_sum)
            .wrapping_add(self.mix)
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::new()
    }
}
