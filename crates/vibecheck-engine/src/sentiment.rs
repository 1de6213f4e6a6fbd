//! Lightweight lexicon-based sentiment estimator
//!
//! Counts positive and negative lexicon tokens. The difference is the raw
//! score; polarity ramps linearly and saturates at a difference of four.

use crate::normalizer::punctuation_regex;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vibecheck_core::{Result, SentimentResult};

/// Raw score difference at which polarity saturates
pub const POLARITY_SATURATION: f64 = 4.0;

/// Positive and negative token sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    #[serde(default)]
    pub positive: HashSet<String>,

    #[serde(default)]
    pub negative: HashSet<String>,
}

impl SentimentLexicon {
    pub fn new<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Polarity for a raw score, in [-1, 1]
pub fn polarity(score: i64) -> f64 {
    if score == 0 {
        0.0
    } else {
        (score as f64 / POLARITY_SATURATION).clamp(-1.0, 1.0)
    }
}

pub struct SentimentEstimator {
    lexicon: SentimentLexicon,
    punctuation: Regex,
}

impl SentimentEstimator {
    pub fn new(lexicon: SentimentLexicon) -> Result<Self> {
        Ok(Self {
            lexicon,
            punctuation: punctuation_regex()?,
        })
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Estimate sentiment of `text`
    pub fn estimate(&self, text: &str) -> SentimentResult {
        let lowered = text.to_lowercase();
        let clean = self.punctuation.replace_all(&lowered, "");

        let mut pos_count = 0;
        let mut neg_count = 0;
        for token in clean.split_whitespace() {
            // A token in both sets counts on both sides
            if self.lexicon.positive.contains(token) {
                pos_count += 1;
            }
            if self.lexicon.negative.contains(token) {
                neg_count += 1;
            }
        }

        let score = pos_count as i64 - neg_count as i64;

        SentimentResult {
            score,
            polarity: polarity(score),
            pos_count,
            neg_count,
        }
    }
}
