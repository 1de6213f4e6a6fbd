//! Input normalization
//!
//! Produces the two views of an input the matcher needs:
//! - a lowercased copy with punctuation intact, for phrase containment
//! - stemmed, synonym-mapped tokens from a punctuation-stripped copy

use crate::negation::detect_negation;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use vibecheck_core::Result;

/// Raw token to canonical token
pub type SynonymTable = HashMap<String, String>;

/// Anything that is neither an ASCII word character nor whitespace
pub(crate) const PUNCTUATION_PATTERN: &str = r"[^0-9A-Za-z_\s]";

pub(crate) fn punctuation_regex() -> Result<Regex> {
    Regex::new(PUNCTUATION_PATTERN).map_err(|e| {
        vibecheck_core::Error::pattern(format!("Failed to compile punctuation regex: {e}"))
    })
}

/// Trim and collapse whitespace runs to single spaces. Case is preserved.
pub fn preprocess(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip one of "ing", "ed" or "s", then a trailing "ly".
///
/// No dictionary is consulted, so short words can be over-stripped
/// ("bus" becomes "bu").
pub fn stem(word: &str) -> &str {
    let word = word
        .strip_suffix("ing")
        .or_else(|| word.strip_suffix("ed"))
        .or_else(|| word.strip_suffix('s'))
        .unwrap_or(word);
    word.strip_suffix("ly").unwrap_or(word)
}

/// Split on single spaces and stem each token
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| stem(t).to_string())
        .collect()
}

/// Per-call view of an input, computed once and shared by every matcher
#[derive(Debug, Clone)]
pub struct NormalizedInput {
    lowered: String,
    tokens: Vec<String>,
    token_set: HashSet<String>,
    negated: bool,
}

impl NormalizedInput {
    /// Lowercased input with punctuation kept
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Stemmed, synonym-mapped tokens in input order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.token_set.contains(token)
    }

    /// Whether any token is a negator
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Lowercases, stems and maps tokens through a synonym table
pub struct Normalizer {
    synonyms: SynonymTable,
    punctuation: Regex,
}

impl Normalizer {
    /// Create a normalizer over the given synonym table
    pub fn new(synonyms: SynonymTable) -> Result<Self> {
        Ok(Self {
            synonyms,
            punctuation: punctuation_regex()?,
        })
    }

    /// Canonical form of `token`, or `token` itself when unmapped
    pub fn map_synonym<'a>(&'a self, token: &'a str) -> &'a str {
        self.synonyms.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }

    /// Build the matcher view of a preprocessed input
    pub fn analyze(&self, input: &str) -> NormalizedInput {
        let lowered = input.to_lowercase();
        let stripped = preprocess(&self.punctuation.replace_all(&lowered, ""));

        let tokens: Vec<String> = tokenize(&stripped)
            .iter()
            .map(|t| self.map_synonym(t).to_string())
            .collect();
        let negated = detect_negation(&tokens);
        let token_set = tokens.iter().cloned().collect();

        NormalizedInput {
            lowered,
            tokens,
            token_set,
            negated,
        }
    }
}
