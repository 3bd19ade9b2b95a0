// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

#![cfg(feature = "easy-functions")]

use crate::compare::CompareOptions;
use crate::digest::parser::{ParseError, ParseErrorField, ParseErrorKind};
use crate::digest::Digest;

/// The operand (side) which caused a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorSide {
    /// The left hand side.
    Left,
    /// The right hand side.
    Right,
}

impl core::fmt::Display for ParseErrorSide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorSide::Left => "1",
            ParseErrorSide::Right => "2",
        })
    }
}

/// The error type representing a parse error for one of the operands
/// specified to the [`compare()`] function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("error occurred while parsing digest {0} ({field}): {kind}", field = .1.field(), kind = .1.kind())]
pub struct ParseErrorEither(ParseErrorSide, #[source] ParseError);

impl ParseErrorEither {
    /// Returns which operand caused a parse error.
    pub fn side(&self) -> ParseErrorSide {
        self.0
    }

    /// Returns the cause of the error.
    pub fn kind(&self) -> ParseErrorKind {
        self.1.kind()
    }

    /// Returns the field which caused the error.
    pub fn field(&self) -> ParseErrorField {
        self.1.field()
    }
}

/// Compares two digest lines with the default options.
///
/// If a parse error occurs, [`Err`] containing
/// [a parse error](ParseErrorEither) is returned.
/// Otherwise, [`Ok`] containing the similarity score (`0..=100`) is returned.
///
/// # Example
///
/// ```
/// let data: Vec<u8> = (0u32..20000).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
/// let line = mrsh::hash_buf(&data).unwrap().to_string();
/// assert_eq!(mrsh::compare(&line, &line).unwrap(), 100);
/// assert_eq!(
///     mrsh::compare(&line, "not a digest").unwrap_err().side(),
///     mrsh::ParseErrorSide::Right
/// );
/// ```
pub fn compare(lhs: &str, rhs: &str) -> Result<u32, ParseErrorEither> {
    let lhs: Digest = match str::parse(lhs) {
        Ok(value) => value,
        Err(err) => return Err(ParseErrorEither(ParseErrorSide::Left, err)),
    };
    let rhs: Digest = match str::parse(rhs) {
        Ok(value) => value,
        Err(err) => return Err(ParseErrorEither(ParseErrorSide::Right, err)),
    };
    Ok(lhs.compare(&rhs, &CompareOptions::default()))
}
