// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Internal hashes as used in the digest generator.

pub mod fnv;
pub mod rolling_hash;
