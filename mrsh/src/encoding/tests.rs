// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Tests: [`crate::encoding`].

#![cfg(test)]

use crate::params::FILTER_SIZE;
use crate::test_utils::{cover_auto_debug, random_buffer};

use super::SegmentEncoding;

fn sample_segment() -> [u8; FILTER_SIZE] {
    let mut segment = [0u8; FILTER_SIZE];
    segment.copy_from_slice(&random_buffer(1, FILTER_SIZE));
    segment
}

#[test]
fn basic_impls() {
    assert_eq!(SegmentEncoding::default(), SegmentEncoding::Base64);
    assert_eq!(SegmentEncoding::Base64.to_string(), "base64");
    assert_eq!(SegmentEncoding::Hex.to_string(), "hex");
    cover_auto_debug(&SegmentEncoding::Hex);
}

#[test]
fn encoded_lengths() {
    assert_eq!(SegmentEncoding::Base64.encoded_len(), 344);
    assert_eq!(SegmentEncoding::Hex.encoded_len(), 512);
    let segment = sample_segment();
    for encoding in [SegmentEncoding::Base64, SegmentEncoding::Hex] {
        let mut out = String::new();
        encoding.encode_into(&segment, &mut out);
        assert_eq!(out.len(), encoding.encoded_len(), "failed on encoding={}", encoding);
        // Appends, never overwrites.
        encoding.encode_into(&segment, &mut out);
        assert_eq!(out.len(), encoding.encoded_len() * 2, "failed on encoding={}", encoding);
    }
}

#[test]
fn known_encodings() {
    let mut segment = [0u8; FILTER_SIZE];
    segment[0] = 0xab;
    segment[FILTER_SIZE - 1] = 0x01;

    let mut hex = String::new();
    SegmentEncoding::Hex.encode_into(&segment, &mut hex);
    assert!(hex.starts_with("AB00"));
    assert!(hex.ends_with("0001"));

    let mut b64 = String::new();
    SegmentEncoding::Base64.encode_into(&[0u8; FILTER_SIZE], &mut b64);
    // 256 bytes = 85 groups of 3 + 1 byte (padded with "==").
    assert_eq!(b64, format!("{}AA==", "A".repeat(340)));
}

#[test]
fn decode_accepts_own_output() {
    let segment = sample_segment();
    for encoding in [SegmentEncoding::Base64, SegmentEncoding::Hex] {
        let mut out = String::new();
        encoding.encode_into(&segment, &mut out);
        assert_eq!(encoding.decode(&out), Some(segment), "failed on encoding={}", encoding);
    }
    // Hex is case insensitive.
    let mut out = String::new();
    SegmentEncoding::Hex.encode_into(&segment, &mut out);
    assert_eq!(SegmentEncoding::Hex.decode(&out.to_lowercase()), Some(segment));
}

#[test]
fn decode_rejects_invalid_text() {
    let mut b64 = String::new();
    SegmentEncoding::Base64.encode_into(&sample_segment(), &mut b64);
    let mut hex = String::new();
    SegmentEncoding::Hex.encode_into(&sample_segment(), &mut hex);

    // Wrong length
    assert_eq!(SegmentEncoding::Base64.decode(&b64[..340]), None);
    assert_eq!(SegmentEncoding::Base64.decode(""), None);
    assert_eq!(SegmentEncoding::Hex.decode(&hex[..510]), None);
    assert_eq!(SegmentEncoding::Hex.decode(&hex[..511]), None);
    assert_eq!(SegmentEncoding::Hex.decode(""), None);
    // Valid Base64 of a wrong number of bytes
    assert_eq!(SegmentEncoding::Base64.decode("AAAA"), None);
    // Invalid characters
    let bad_b64 = format!("!{}", &b64[1..]);
    assert_eq!(SegmentEncoding::Base64.decode(&bad_b64), None);
    let bad_hex = format!("G{}", &hex[1..]);
    assert_eq!(SegmentEncoding::Hex.decode(&bad_hex), None);
    // Encodings are not interchangeable.
    assert_eq!(SegmentEncoding::Hex.decode(&b64), None);
    assert_eq!(SegmentEncoding::Base64.decode(&hex), None);
}

#[test]
fn detect_by_length() {
    assert_eq!(SegmentEncoding::detect(344, 1), Some(SegmentEncoding::Base64));
    assert_eq!(SegmentEncoding::detect(512, 1), Some(SegmentEncoding::Hex));
    assert_eq!(SegmentEncoding::detect(344 * 3, 3), Some(SegmentEncoding::Base64));
    assert_eq!(SegmentEncoding::detect(512 * 3, 3), Some(SegmentEncoding::Hex));
    assert_eq!(SegmentEncoding::detect(344 * 3, 2), None);
    assert_eq!(SegmentEncoding::detect(512, 2), None);
    assert_eq!(SegmentEncoding::detect(0, 1), None);
    assert_eq!(SegmentEncoding::detect(343, 1), None);
    assert_eq!(SegmentEncoding::detect(344, usize::MAX), None);
}
