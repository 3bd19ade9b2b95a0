// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Tests: [`crate::utils`].

#![cfg(test)]

use crate::params::MAX_NAME_LEN;

use super::{name_suffix, normalize_name};

#[test]
fn short_names_are_kept() {
    assert_eq!(name_suffix("", 10), "");
    assert_eq!(name_suffix("abc", 3), "abc");
    assert_eq!(normalize_name("/tmp/file.bin"), "/tmp/file.bin");
    let exact = "x".repeat(MAX_NAME_LEN);
    assert_eq!(normalize_name(&exact), exact);
}

#[test]
fn long_names_keep_suffix() {
    assert_eq!(name_suffix("abcdef", 3), "def");
    let name = format!("{}/file.bin", "d".repeat(300));
    let normalized = normalize_name(&name);
    assert_eq!(normalized.len(), MAX_NAME_LEN);
    assert!(normalized.ends_with("/file.bin"));
    assert!(name.ends_with(&normalized));
}

#[test]
fn truncation_respects_char_boundaries() {
    // 'é' is two bytes long: cutting 5 bytes off "éééé" (8 bytes)
    // would split a character.
    assert_eq!(name_suffix("éééé", 5), "éé");
    assert_eq!(name_suffix("éééé", 6), "ééé");
    // '𝄞' is four bytes long.
    assert_eq!(name_suffix("a𝄞b", 4), "b");
    assert_eq!(name_suffix("a𝄞b", 5), "𝄞b");

    let name = "é".repeat(MAX_NAME_LEN);
    let normalized = normalize_name(&name);
    assert!(normalized.len() <= MAX_NAME_LEN);
    assert!(normalized.len() >= MAX_NAME_LEN - 1);
    assert!(normalized.chars().all(|c| c == 'é'));
}

#[test]
fn reserved_characters_are_replaced() {
    assert_eq!(normalize_name("C:\\dir\\a.txt"), "C_\\dir\\a.txt");
    assert_eq!(normalize_name("a:b\r\nc"), "a_b__c");
    assert_eq!(normalize_name(":::"), "___");
}

#[test]
fn leading_comment_prefix_is_replaced() {
    assert_eq!(normalize_name("#notes.txt"), "_notes.txt");
    assert_eq!(normalize_name("##"), "_#");
    assert_eq!(normalize_name("dir/#notes.txt"), "dir/#notes.txt");
    // Applies to the truncated name too.
    let name = format!("{}#{}", "x".repeat(100), "y".repeat(MAX_NAME_LEN - 1));
    let normalized = normalize_name(&name);
    assert_eq!(normalized.len(), MAX_NAME_LEN);
    assert!(normalized.starts_with("_y"));
}
