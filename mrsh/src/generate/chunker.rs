// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Content-defined chunking driven by the rolling hash.

use core::ops::Range;

use crate::generate::hashes::rolling_hash::RollingHash;
use crate::macros::invariant;
use crate::params::{BLOCK_SIZE, SKIPPED_BYTES};

/// Selects how the first chunk boundary of a buffer is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkMode {
    /// Every boundary closes a chunk, including the first one.
    ///
    /// This is the mode to hash whole files.
    #[default]
    WholeInput,

    /// The first boundary only marks where chunking starts.
    ///
    /// Bytes before the first boundary are not hashed.  This is the mode
    /// to hash network packets or fixed-size blocks cut out of a larger
    /// stream, where the start of the buffer is not aligned to content.
    Packet,
}

/// Tests whether a rolling hash value triggers a chunk boundary.
#[inline(always)]
pub(crate) fn is_boundary(value: u32) -> bool {
    value % BLOCK_SIZE == BLOCK_SIZE - 1
}

/// Iterator over the content-defined chunks of a buffer.
///
/// Each item is the byte range of one chunk.  After a boundary,
/// [`SKIPPED_BYTES`] bytes are not fed to the rolling hash (when enough
/// bytes remain) but they still belong to the following chunk.
///
/// The bytes after the last boundary always form a final chunk, which is
/// empty if the last boundary is on the last byte.
///
/// # Example
///
/// ```
/// use mrsh::internal_hashes::Chunker;
///
/// let data = b"Hello, World!\n";
/// let chunks: Vec<_> = Chunker::new(data).collect();
/// assert_eq!(chunks, [0..data.len()]);
/// ```
#[derive(Debug, Clone)]
pub struct Chunker<'a> {
    /// The buffer to split.
    buf: &'a [u8],
    /// The rolling hash state (never reset between chunks).
    hash: RollingHash,
    /// The next position to feed to the rolling hash.
    pos: usize,
    /// The start of the current chunk.
    start: usize,
    /// How to handle the first boundary.
    mode: ChunkMode,
    /// Whether any boundary was met.
    met_boundary: bool,
    /// Whether the final chunk was emitted.
    finished: bool,
}

impl<'a> Chunker<'a> {
    /// Creates a chunker over `buf` in the [`ChunkMode::WholeInput`] mode.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_mode(buf, ChunkMode::WholeInput)
    }

    /// Creates a chunker over `buf` in the specified mode.
    pub fn with_mode(buf: &'a [u8], mode: ChunkMode) -> Self {
        Chunker {
            buf,
            hash: RollingHash::new(),
            pos: 0,
            start: 0,
            mode,
            met_boundary: false,
            finished: false,
        }
    }

    /// Returns the chunking mode.
    pub fn mode(&self) -> ChunkMode {
        self.mode
    }
}

impl Iterator for Chunker<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let len = self.buf.len();
        while self.pos < len {
            let i = self.pos;
            self.pos += 1;
            if !is_boundary(self.hash.update_by_byte(self.buf[i]).value()) {
                continue;
            }
            let chunk = self.start..i + 1;
            self.start = i + 1;
            if i + SKIPPED_BYTES < len {
                self.pos = i + SKIPPED_BYTES + 1;
            }
            let first = !self.met_boundary;
            self.met_boundary = true;
            if first && self.mode == ChunkMode::Packet {
                continue;
            }
            return Some(chunk);
        }
        invariant!(self.start <= len);
        self.finished = true;
        Some(self.start..len)
    }
}

impl core::iter::FusedIterator for Chunker<'_> {}
