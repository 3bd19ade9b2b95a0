// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Text encodings of digest segments.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::params::FILTER_SIZE;

/// The text encoding of the segments field of a digest line.
///
/// Each segment (a raw [`FILTER_SIZE`]-byte Bloom filter) is encoded on its
/// own and the results are concatenated without separators.  Since every
/// encoded segment has the same length, segment boundaries are recovered
/// from the position inside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SegmentEncoding {
    /// Padded standard Base64 (RFC 4648), 344 characters per segment.
    ///
    /// This is the canonical encoding used by [`Digest`](crate::Digest)'s
    /// [`Display`](core::fmt::Display) implementation.
    #[default]
    Base64,

    /// Hexadecimal, 512 characters per segment.
    ///
    /// Digits are written in upper case and accepted in either case.
    /// This is the encoding printed by the stand-alone `mrsh` tool.
    Hex,
}

impl SegmentEncoding {
    /// Length of Base64-encoded segments.
    pub(crate) const BASE64_LEN: usize = FILTER_SIZE.div_ceil(3) * 4;

    /// Length of hex-encoded segments.
    pub(crate) const HEX_LEN: usize = FILTER_SIZE * 2;

    /// Returns the length of one encoded segment.
    pub const fn encoded_len(&self) -> usize {
        match self {
            SegmentEncoding::Base64 => Self::BASE64_LEN,
            SegmentEncoding::Hex => Self::HEX_LEN,
        }
    }

    /// Detects the encoding of a segments field holding `segments` segments.
    ///
    /// Returns [`None`] if the field length fits neither encoding.
    pub fn detect(field_len: usize, segments: usize) -> Option<Self> {
        if Self::BASE64_LEN.checked_mul(segments) == Some(field_len) {
            Some(SegmentEncoding::Base64)
        } else if Self::HEX_LEN.checked_mul(segments) == Some(field_len) {
            Some(SegmentEncoding::Hex)
        } else {
            None
        }
    }

    /// Appends one encoded segment to `out`.
    pub fn encode_into(&self, segment: &[u8; FILTER_SIZE], out: &mut String) {
        match self {
            SegmentEncoding::Base64 => STANDARD.encode_string(segment, out),
            SegmentEncoding::Hex => out.push_str(&hex::encode_upper(segment)),
        }
    }

    /// Decodes one encoded segment.
    ///
    /// Returns [`None`] if `text` is not a valid encoding of exactly
    /// [`FILTER_SIZE`] bytes.
    pub fn decode<T: AsRef<[u8]>>(&self, text: T) -> Option<[u8; FILTER_SIZE]> {
        let text = text.as_ref();
        let mut segment = [0u8; FILTER_SIZE];
        match self {
            SegmentEncoding::Base64 => {
                let decoded = STANDARD.decode(text).ok()?;
                if decoded.len() != FILTER_SIZE {
                    return None;
                }
                segment.copy_from_slice(&decoded);
            }
            SegmentEncoding::Hex => {
                hex::decode_to_slice(text, &mut segment).ok()?;
            }
        }
        Some(segment)
    }
}

impl core::fmt::Display for SegmentEncoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            SegmentEncoding::Base64 => "base64",
            SegmentEncoding::Hex => "hex",
        })
    }
}

mod tests;
