// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Lists of digests and batch comparison.

use std::io::{BufRead, Write};

use tracing::{trace, warn};

use crate::compare::CompareOptions;
use crate::digest::parser::{ParseError, ParseErrorField, ParseErrorKind};
use crate::digest::Digest;
use crate::encoding::SegmentEncoding;
use crate::utils::COMMENT_PREFIX;

/// A reported match between two digests.
///
/// It is displayed as `lhs|rhs|score` with a score of three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// The name of the left hand side digest.
    pub lhs: String,
    /// The name of the right hand side digest.
    pub rhs: String,
    /// The similarity score (`0..=100`).
    pub score: u32,
}

impl core::fmt::Display for Match {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}|{}|{:03}", self.lhs, self.rhs, self.score)
    }
}

/// A malformed line skipped by [`DigestList::read_from()`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_no}: {error}")]
pub struct LineError {
    /// The line number (starting with 1).
    pub line_no: usize,
    /// The parse error.
    #[source]
    pub error: ParseError,
}

/// An ordered list of digests.
///
/// # Example
///
/// ```
/// use mrsh::{CompareOptions, DigestList, Generator};
///
/// let data: Vec<u8> = (0u32..20000).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
/// let generator = Generator::new();
/// let mut list = DigestList::new();
/// list.push(generator.hash("a.bin", &data).unwrap());
/// list.push(generator.hash("b.bin", &data).unwrap());
/// list.push(generator.hash("c.bin", b"unrelated").unwrap());
///
/// let matches = list.compare_all(&CompareOptions::default());
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].to_string(), "a.bin|b.bin|100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigestList {
    digests: Vec<Digest>,
}

impl DigestList {
    /// Creates an empty list.
    pub fn new() -> Self {
        DigestList { digests: Vec::new() }
    }

    /// Appends a digest.
    pub fn push(&mut self, digest: Digest) {
        self.digests.push(digest);
    }

    /// Returns the number of digests.
    #[inline]
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Returns an iterator over the digests.
    pub fn iter(&self) -> core::slice::Iter<'_, Digest> {
        self.digests.iter()
    }

    /// Returns the digests as a slice.
    pub fn as_slice(&self) -> &[Digest] {
        &self.digests
    }

    /// Compares every unordered pair of digests in this list once.
    ///
    /// For a pair of positions `i < j`, the digest at `i` is the left hand
    /// side.  Self-matches are not reported.
    pub fn compare_all(&self, options: &CompareOptions) -> Vec<Match> {
        let mut matches = Vec::new();
        for (i, lhs) in self.digests.iter().enumerate() {
            for rhs in &self.digests[i + 1..] {
                report(lhs, rhs, options, &mut matches);
            }
        }
        matches
    }

    /// Compares every digest of this list with every digest of `other`.
    pub fn compare_with(&self, other: &DigestList, options: &CompareOptions) -> Vec<Match> {
        let mut matches = Vec::new();
        for lhs in &self.digests {
            for rhs in &other.digests {
                report(lhs, rhs, options, &mut matches);
            }
        }
        matches
    }

    /// Compares one digest with every digest of this list.
    ///
    /// The given digest is the left hand side of every match.
    pub fn compare_digest(&self, digest: &Digest, options: &CompareOptions) -> Vec<Match> {
        let mut matches = Vec::new();
        for rhs in &self.digests {
            report(digest, rhs, options, &mut matches);
        }
        matches
    }

    /// Reads digest lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.  Malformed
    /// lines (invalid UTF-8 included) are skipped too and returned along
    /// with the list (each one is also logged as a warning).  Only I/O
    /// errors fail the whole read.
    ///
    /// Both segment encodings are accepted, even in the same input.
    pub fn read_from<R: BufRead>(reader: R) -> std::io::Result<(DigestList, Vec<LineError>)> {
        let mut list = DigestList::new();
        let mut errors = Vec::new();
        for (index, line) in reader.split(b'\n').enumerate() {
            let bytes = line?;
            let mut line = &bytes[..];
            while let [rest @ .., b'\r'] = line {
                line = rest;
            }
            if line.trim_ascii().is_empty() || line.starts_with(&[COMMENT_PREFIX]) {
                continue;
            }
            let parsed = core::str::from_utf8(line)
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidUtf8, ParseErrorField::Line))
                .and_then(|line| line.parse::<Digest>());
            match parsed {
                Ok(digest) => list.push(digest),
                Err(error) => {
                    let line_no = index + 1;
                    warn!(line_no, %error, "skipped a malformed digest line");
                    errors.push(LineError { line_no, error });
                }
            }
        }
        Ok((list, errors))
    }

    /// Writes all digests, one line each.
    pub fn write_to<W: Write>(&self, writer: &mut W, encoding: SegmentEncoding) -> std::io::Result<()> {
        for digest in &self.digests {
            writeln!(writer, "{}", digest.to_line(encoding))?;
        }
        Ok(())
    }
}

/// Compares two digests and records the match if the score reaches the
/// threshold.
fn report(lhs: &Digest, rhs: &Digest, options: &CompareOptions, matches: &mut Vec<Match>) {
    let score = lhs.compare(rhs, options);
    if !options.is_reported(score) {
        return;
    }
    trace!(lhs = lhs.name(), rhs = rhs.name(), score, "found a match");
    matches.push(Match {
        lhs: lhs.name().to_string(),
        rhs: rhs.name().to_string(),
        score,
    });
}

impl core::ops::Index<usize> for DigestList {
    type Output = Digest;
    fn index(&self, index: usize) -> &Digest {
        &self.digests[index]
    }
}

impl FromIterator<Digest> for DigestList {
    fn from_iter<T: IntoIterator<Item = Digest>>(iter: T) -> Self {
        DigestList {
            digests: iter.into_iter().collect(),
        }
    }
}

impl Extend<Digest> for DigestList {
    fn extend<T: IntoIterator<Item = Digest>>(&mut self, iter: T) {
        self.digests.extend(iter);
    }
}

impl IntoIterator for DigestList {
    type Item = Digest;
    type IntoIter = std::vec::IntoIter<Digest>;
    fn into_iter(self) -> Self::IntoIter {
        self.digests.into_iter()
    }
}

impl<'a> IntoIterator for &'a DigestList {
    type Item = &'a Digest;
    type IntoIter = core::slice::Iter<'a, Digest>;
    fn into_iter(self) -> Self::IntoIter {
        self.digests.iter()
    }
}
