// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Parser of the digest line format.

use crate::digest::Digest;
use crate::encoding::SegmentEncoding;
use crate::params::{FILTER_SIZE, MAX_BLOCKS};

/// A cause of a [digest line](Digest) parse error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Line: the number of colon-separated fields is not five.
    ///
    /// It contains the actual number of fields.
    FieldCount(usize),
    /// Line: is not valid UTF-8.
    InvalidUtf8,
    /// Numeric field: is empty, contains a non-digit or overflows.
    InvalidNumber,
    /// Last segment blocks: exceeds [`MAX_BLOCKS`].
    BlockCountTooLarge,
    /// Segments: the length does not match the segment count.
    EncodedLengthMismatch,
    /// Segments: a segment is not validly encoded.
    InvalidEncoding,
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseErrorKind::FieldCount(n) => write!(f, "expected 5 fields but found {}", n),
            ParseErrorKind::InvalidUtf8 => f.write_str("not valid UTF-8"),
            ParseErrorKind::InvalidNumber => f.write_str("not a valid decimal number"),
            ParseErrorKind::BlockCountTooLarge => {
                write!(f, "block count is larger than {}", MAX_BLOCKS)
            }
            ParseErrorKind::EncodedLengthMismatch => {
                f.write_str("encoded length does not match the segment count")
            }
            ParseErrorKind::InvalidEncoding => f.write_str("segment is not validly encoded"),
        }
    }
}

/// A field of the [digest line](Digest) which caused a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorField {
    /// The whole line.
    Line,
    /// The name.
    Name,
    /// The input length in bytes.
    ByteLength,
    /// The segment count (minus one).
    SegmentCount,
    /// The number of features absorbed by the last segment.
    LastSegmentBlocks,
    /// The encoded segments.
    Segments,
}

impl core::fmt::Display for ParseErrorField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorField::Line => "line",
            ParseErrorField::Name => "name",
            ParseErrorField::ByteLength => "byte length",
            ParseErrorField::SegmentCount => "segment count",
            ParseErrorField::LastSegmentBlocks => "last segment blocks",
            ParseErrorField::Segments => "segments",
        })
    }
}

/// The error type for parse operations of [`Digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("error occurred while parsing a digest ({field}): {kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    field: ParseErrorField,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, field: ParseErrorField) -> Self {
        ParseError { kind, field }
    }

    /// Returns the cause of the error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the field which caused the error.
    pub fn field(&self) -> ParseErrorField {
        self.field
    }
}

/// Parses a decimal field (digits only).
fn parse_number<T: core::str::FromStr>(text: &str, field: ParseErrorField) -> Result<T, ParseError> {
    if text.is_empty() || !text.bytes().all(|ch| ch.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::InvalidNumber, field));
    }
    text.parse()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, field))
}

/// Parses a digest line.
///
/// If `encoding` is [`None`], the segment encoding is detected from the
/// length of the segments field.  A long name is truncated like the
/// argument of [`Digest::new()`].
pub(crate) fn parse_line(line: &str, encoding: Option<SegmentEncoding>) -> Result<Digest, ParseError> {
    let mut fields = line.split(':');
    let (Some(name), Some(size), Some(count), Some(last_blocks), Some(segments), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(ParseError::new(
            ParseErrorKind::FieldCount(line.split(':').count()),
            ParseErrorField::Line,
        ));
    };

    let size: u64 = parse_number(size, ParseErrorField::ByteLength)?;
    let count: u32 = parse_number(count, ParseErrorField::SegmentCount)?;
    let last_blocks: u32 = parse_number(last_blocks, ParseErrorField::LastSegmentBlocks)?;
    if last_blocks > MAX_BLOCKS {
        return Err(ParseError::new(
            ParseErrorKind::BlockCountTooLarge,
            ParseErrorField::LastSegmentBlocks,
        ));
    }

    let num_segments = usize::try_from(count)
        .ok()
        .and_then(|count| count.checked_add(1))
        .ok_or(ParseError::new(ParseErrorKind::InvalidNumber, ParseErrorField::SegmentCount))?;
    let encoding = match encoding {
        Some(encoding) if encoding.encoded_len().checked_mul(num_segments) == Some(segments.len()) => {
            Some(encoding)
        }
        Some(_) => None,
        None => SegmentEncoding::detect(segments.len(), num_segments),
    }
    .ok_or(ParseError::new(
        ParseErrorKind::EncodedLengthMismatch,
        ParseErrorField::Segments,
    ))?;

    let raw_segments = segments
        .as_bytes()
        .chunks_exact(encoding.encoded_len())
        .map(|text| encoding.decode(text))
        .collect::<Option<Vec<[u8; FILTER_SIZE]>>>()
        .ok_or(ParseError::new(ParseErrorKind::InvalidEncoding, ParseErrorField::Segments))?;
    Ok(Digest::from_parts(name, size, raw_segments, last_blocks))
}
