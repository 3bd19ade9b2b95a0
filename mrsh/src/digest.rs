// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! The mrsh-v2 similarity digest.

use tracing::trace;

use crate::bloom::BloomFilter;
use crate::compare::{compare_digests, CompareOptions};
use crate::encoding::SegmentEncoding;
use crate::macros::invariant;
use crate::params::{FILTER_SIZE, MAX_BLOCKS};
use crate::utils::normalize_name;

pub mod parser;

/// An mrsh-v2 similarity digest of one input.
///
/// A digest is a non-empty sequence of [`BloomFilter`] segments.  Chunk
/// features are added to the last segment and once it absorbed
/// [`MAX_BLOCKS`](crate::params::MAX_BLOCKS) features, a new segment is
/// started.  So, every segment but the last one is full.
///
/// # Text format
///
/// A digest is written as a line of five colon-separated fields:
///
/// ```text
/// name:byte_length:segment_count:last_segment_blocks:segments
/// ```
///
/// *   `segment_count` is the number of segments *minus one*.
/// *   `last_segment_blocks` is the number of features absorbed by the last
///     segment (all other segments are full).
/// *   `segments` is the concatenation of all encoded segments
///     (see [`SegmentEncoding`]).
///
/// [`Display`](core::fmt::Display) writes the canonical (Base64) form and
/// [`FromStr`](core::str::FromStr) accepts both encodings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    /// The name of the input (normalized).
    name: String,
    /// The length of the input in bytes.
    size: u64,
    /// Segments (never empty).
    segments: Vec<BloomFilter>,
}

impl Digest {
    /// Creates an empty digest with one empty segment.
    ///
    /// Names longer than [`MAX_NAME_LEN`](crate::params::MAX_NAME_LEN) bytes
    /// keep their suffix.  Colons, line breaks and a leading `#` are
    /// replaced with `_`.
    pub fn new(name: &str) -> Self {
        Digest {
            name: normalize_name(name),
            size: 0,
            segments: vec![BloomFilter::new()],
        }
    }

    /// Returns the name of the digest.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the digest (normalized like [`new()`](Self::new)).
    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_name(name);
    }

    /// Returns the length of the input in bytes.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Adds `len` bytes to the input length.
    pub(crate) fn add_size(&mut self, len: u64) {
        self.size = self.size.saturating_add(len);
    }

    /// Returns all segments.
    #[inline]
    pub fn segments(&self) -> &[BloomFilter] {
        &self.segments
    }

    /// Returns the last (possibly partially filled) segment.
    #[inline]
    pub fn last_segment(&self) -> &BloomFilter {
        invariant!(!self.segments.is_empty());
        &self.segments[self.segments.len() - 1]
    }

    /// Returns the number of segments *minus one*, as written in the
    /// text format.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len() - 1
    }

    /// Adds a chunk feature (its 64-bit FNV-1a hash).
    ///
    /// If the last segment is full, a new segment is started first.
    pub fn add_hash(&mut self, hash: u64) {
        if self.last_segment().is_full() {
            self.segments.push(BloomFilter::new());
            trace!(name = %self.name, segments = self.segments.len(), "started a new segment");
        }
        if let Some(last) = self.segments.last_mut() {
            last.add_hash(hash);
        }
    }

    /// Compares this digest with another.
    ///
    /// See [`compare_digests()`] for details.
    pub fn compare(&self, other: &Digest, options: &CompareOptions) -> u32 {
        compare_digests(self, other, options)
    }

    /// Converts the digest to a line with the specified segment encoding.
    ///
    /// The result does not contain a line break.
    pub fn to_line(&self, encoding: SegmentEncoding) -> String {
        let mut line = String::with_capacity(
            self.name.len() + 48 + encoding.encoded_len() * self.segments.len(),
        );
        line.push_str(&self.name);
        line.push(':');
        line.push_str(&self.size.to_string());
        line.push(':');
        line.push_str(&self.segment_count().to_string());
        line.push(':');
        line.push_str(&self.last_segment().blocks().to_string());
        line.push(':');
        for segment in &self.segments {
            encoding.encode_into(segment.as_bytes(), &mut line);
        }
        line
    }

    /// Parses a digest line written with the specified segment encoding.
    pub fn parse_line(line: &str, encoding: SegmentEncoding) -> Result<Self, parser::ParseError> {
        parser::parse_line(line, Some(encoding))
    }

    /// Creates a digest from parsed parts.
    ///
    /// Every segment but the last one is considered full.
    pub(crate) fn from_parts(
        name: &str,
        size: u64,
        raw_segments: Vec<[u8; FILTER_SIZE]>,
        last_blocks: u32,
    ) -> Self {
        invariant!(!raw_segments.is_empty());
        let count = raw_segments.len();
        let segments = raw_segments
            .into_iter()
            .enumerate()
            .map(|(i, bits)| {
                let blocks = if i + 1 == count {
                    last_blocks
                } else {
                    MAX_BLOCKS
                };
                BloomFilter::from_raw(bits, blocks)
            })
            .collect();
        Digest {
            name: normalize_name(name),
            size,
            segments,
        }
    }
}

impl core::fmt::Display for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_line(SegmentEncoding::Base64))
    }
}

impl core::str::FromStr for Digest {
    type Err = parser::ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_line(s, None)
    }
}
