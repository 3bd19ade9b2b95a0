// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2013 Frank Breitinger
// SPDX-FileCopyrightText: Copyright (C) 2025 mrsh-rs contributors

//! Digest comparison.

use crate::bloom::BloomFilter;
use crate::digest::Digest;
use crate::params::{FILTER_BITS, MIN_BLOCKS, PROBABILITY, SUBHASHES};

/// Selects which digest's segment count divides the sum of
/// per-segment scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoreNormalization {
    /// Normalize by the digest with fewer segments.
    ///
    /// A small input embedded in a large one scores high.
    #[default]
    Smaller,

    /// Normalize by the digest with more segments (file comparison).
    ///
    /// Inputs of very different lengths score low even if one is
    /// contained in the other.
    Larger,
}

/// The error type for invalid [`CompareOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The score threshold is not in `0..=100`.
    #[error("score threshold {0} is out of range (must be 0..=100)")]
    ThresholdOutOfRange(u32),
}

/// Options for digest comparison.
///
/// These are fixed before comparing and passed to every operation.
///
/// # Example
///
/// ```
/// use mrsh::{CompareOptions, ScoreNormalization};
///
/// let options = CompareOptions::new()
///     .with_normalization(ScoreNormalization::Larger)
///     .with_threshold(40)
///     .unwrap();
/// assert!(options.is_reported(40));
/// assert!(!options.is_reported(39));
/// assert!(CompareOptions::new().with_threshold(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompareOptions {
    normalization: ScoreNormalization,
    threshold: u32,
}

impl CompareOptions {
    /// The default score threshold.
    pub const DEFAULT_THRESHOLD: u32 = 1;

    /// Creates the default options.
    pub const fn new() -> Self {
        CompareOptions {
            normalization: ScoreNormalization::Smaller,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Sets the score normalization.
    pub fn with_normalization(mut self, normalization: ScoreNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Sets the minimum score of reported matches.
    pub fn with_threshold(mut self, threshold: u32) -> Result<Self, ConfigError> {
        if threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Returns the score normalization.
    pub fn normalization(&self) -> ScoreNormalization {
        self.normalization
    }

    /// Returns the minimum score of reported matches.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Tests whether a score reaches the threshold.
    #[inline]
    pub fn is_reported(&self, score: u32) -> bool {
        score >= self.threshold
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the number of bits two Bloom filters are expected to share
/// by chance.
///
/// `blocks1` and `blocks2` are the numbers of features absorbed by the
/// filters.  Every feature sets [`SUBHASHES`] bits, each of which hits
/// one of [`FILTER_BITS`] positions uniformly.
pub fn compute_e_min(blocks1: u32, blocks2: u32) -> f64 {
    let k = SUBHASHES as f64;
    let (b1, b2) = (f64::from(blocks1), f64::from(blocks2));
    let tmp1 = PROBABILITY.powf(k * b1);
    let tmp2 = PROBABILITY.powf(k * b2);
    let tmp3 = PROBABILITY.powf(k * (b1 + b2));
    FILTER_BITS as f64 * (1.0 - tmp1 - tmp2 + tmp3)
}

/// Computes the score of the best-matching segment of `larger` for
/// `segment`.
///
/// Candidates are scanned in order and the scan stops at the first one
/// with fewer than [`MIN_BLOCKS`] features.  For each candidate, the
/// number of common bits is compared against a threshold placed 30% of
/// the way from the bits expected by chance (see [`compute_e_min()`]) to
/// the maximum possible.
pub fn bloom_max_score(segment: &BloomFilter, larger: &Digest) -> u32 {
    let candidates = larger.segments();
    let last_index = candidates.len() - 1;
    let bits1 = i64::from(segment.count_ones());
    let mut e_min = compute_e_min(segment.blocks(), candidates[0].blocks()) as i64;
    let mut score = 0;
    for (i, candidate) in candidates.iter().enumerate() {
        if candidate.blocks() < MIN_BLOCKS {
            break;
        }
        // The last segment may be partially filled.
        if i == last_index {
            e_min = compute_e_min(candidate.blocks(), segment.blocks()) as i64;
        }
        let e_max = bits1.min(i64::from(candidate.count_ones()));
        let threshold = (0.3 * (e_max - e_min) as f64 + e_min as f64) as i64;
        let common = i64::from(candidate.common_bits(segment));
        let candidate_score = if common < threshold {
            0
        } else if e_max - threshold >= 1 {
            100 * (common - threshold) / (e_max - threshold)
        } else {
            continue;
        };
        if candidate_score > score {
            score = candidate_score;
            if score == 100 {
                break;
            }
        }
    }
    score as u32
}

/// Compares two digests and returns the similarity score (`0..=100`).
///
/// The digest with more segments is the "larger" one (`a` on a tie).
/// Every segment of the smaller digest, up to the first one with fewer
/// than [`MIN_BLOCKS`] features, is scored with [`bloom_max_score()`]
/// against the larger digest.  The sum is divided by the number of
/// segments of the digest selected by [`ScoreNormalization`], not counting
/// its last segment if it holds fewer than [`MIN_BLOCKS`] features.
///
/// If that number is zero (for instance, a small input with a single
/// sparse segment), the score is `0`.
pub fn compare_digests(a: &Digest, b: &Digest, options: &CompareOptions) -> u32 {
    let (larger, smaller) = if a.segments().len() < b.segments().len() {
        (b, a)
    } else {
        (a, b)
    };
    let reference = match options.normalization() {
        ScoreNormalization::Smaller => smaller,
        ScoreNormalization::Larger => larger,
    };
    let mut num_segments = reference.segments().len() as u64;
    if reference.last_segment().blocks() < MIN_BLOCKS {
        num_segments -= 1;
    }
    if num_segments == 0 {
        return 0;
    }
    let total: u64 = smaller
        .segments()
        .iter()
        .take_while(|segment| segment.blocks() >= MIN_BLOCKS)
        .map(|segment| u64::from(bloom_max_score(segment, larger)))
        .sum();
    (total / num_segments).min(100) as u32
}
