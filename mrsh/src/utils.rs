// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

use crate::params::MAX_NAME_LEN;

/// Characters which would break the digest line format.
const RESERVED_NAME_CHARS: [char; 3] = [':', '\r', '\n'];

/// A digest list line starting with this byte is a comment.
pub(crate) const COMMENT_PREFIX: u8 = b'#';

/// Returns the longest suffix of `name` fitting in `max_len` bytes.
///
/// The cut is moved forward to the next UTF-8 character boundary so that
/// the result may be slightly shorter than `max_len`.
pub(crate) fn name_suffix(name: &str, max_len: usize) -> &str {
    if name.len() <= max_len {
        return name;
    }
    let mut start = name.len() - max_len;
    while !name.is_char_boundary(start) {
        start += 1;
    }
    &name[start..]
}

/// Normalizes a digest name.
///
/// Long names keep their last [`MAX_NAME_LEN`] bytes (the most specific
/// part of a path) and reserved characters are replaced with `_`.
/// A leading [`COMMENT_PREFIX`] is replaced as well, or the digest line
/// would read as a comment.
pub(crate) fn normalize_name(name: &str) -> String {
    let mut name = name_suffix(name, MAX_NAME_LEN).replace(RESERVED_NAME_CHARS, "_");
    if name.as_bytes().first() == Some(&COMMENT_PREFIX) {
        name.replace_range(..1, "_");
    }
    name
}

mod tests;
