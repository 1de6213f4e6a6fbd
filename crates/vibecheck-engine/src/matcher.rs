//! Trigger matching for a single pattern entry
//!
//! Multi-word triggers are literal substrings of the lowercased input and
//! weigh 3. Single-word triggers are stripped of punctuation and stemmed the
//! same way input tokens are, then looked up among the mapped tokens,
//! weighing 1.5. Every trigger that fires contributes, then the sum is
//! scaled by the entry priority and adjusted for negation.

use crate::negation::adjust_for_negation;
use crate::normalizer::{punctuation_regex, stem, NormalizedInput};
use aho_corasick::AhoCorasick;
use regex::Regex;
use tracing::trace;
use vibecheck_core::{Error, MatchResult, PatternEntry, Result, NO_MATCH_CATEGORY};

/// Weight of a multi-word trigger
pub const PHRASE_WEIGHT: f64 = 3.0;

/// Weight of a single-word trigger
pub const WORD_WEIGHT: f64 = 1.5;

/// Check that an entry can take part in scoring
pub fn validate_entry(entry: &PatternEntry) -> Result<()> {
    if entry.category.trim().is_empty() {
        return Err(Error::config("Pattern entry has an empty category"));
    }
    if entry.category == NO_MATCH_CATEGORY {
        return Err(Error::config(format!(
            "Category '{NO_MATCH_CATEGORY}' is reserved for unmatched input"
        )));
    }
    if !entry.priority.is_finite() || entry.priority <= 0.0 {
        return Err(Error::config(format!(
            "Pattern entry '{}' has invalid priority {}",
            entry.category, entry.priority
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
enum Trigger {
    /// Index into the entry's phrase automaton
    Phrase(usize),
    /// Pre-stemmed word
    Word(String),
}

impl Trigger {
    fn weight(&self) -> f64 {
        match self {
            Self::Phrase(_) => PHRASE_WEIGHT,
            Self::Word(_) => WORD_WEIGHT,
        }
    }
}

/// A pattern entry with its triggers compiled for matching
pub struct CompiledPattern {
    entry: PatternEntry,
    triggers: Vec<Trigger>,
    phrases: Option<AhoCorasick>,
    phrase_count: usize,
}

impl CompiledPattern {
    /// Compile an entry's triggers
    pub fn new(entry: PatternEntry) -> Result<Self> {
        Self::with_punctuation(entry, &punctuation_regex()?)
    }

    /// Compile an entry's triggers, stripping word triggers with `punctuation`
    pub(crate) fn with_punctuation(entry: PatternEntry, punctuation: &Regex) -> Result<Self> {
        validate_entry(&entry)?;

        let mut phrases: Vec<String> = Vec::new();
        let mut triggers = Vec::with_capacity(entry.triggers.len());

        for raw in &entry.triggers {
            let trigger = raw.to_lowercase();
            if trigger.contains(' ') {
                // Repeated phrases share one automaton slot but still score per listing
                let slot = match phrases.iter().position(|p| *p == trigger) {
                    Some(slot) => slot,
                    None => {
                        phrases.push(trigger);
                        phrases.len() - 1
                    }
                };
                triggers.push(Trigger::Phrase(slot));
            } else {
                let word = punctuation.replace_all(&trigger, "");
                if word.is_empty() {
                    trace!(
                        category = %entry.category,
                        trigger = %raw,
                        "Dropping punctuation-only trigger"
                    );
                    continue;
                }
                triggers.push(Trigger::Word(stem(&word).to_string()));
            }
        }

        let phrase_count = phrases.len();
        let phrases = if phrases.is_empty() {
            None
        } else {
            Some(AhoCorasick::new(&phrases).map_err(|e| {
                Error::pattern(format!(
                    "Failed to build phrase matcher for '{}': {e}",
                    entry.category
                ))
            })?)
        };

        Ok(Self {
            entry,
            triggers,
            phrases,
            phrase_count,
        })
    }

    pub fn entry(&self) -> &PatternEntry {
        &self.entry
    }

    /// Score a normalized input against this entry
    pub fn score(&self, input: &NormalizedInput) -> MatchResult {
        let phrases_found = self.phrases_found(input.lowered());

        let mut score = 0.0;
        let mut triggered = false;

        for trigger in &self.triggers {
            let hit = match trigger {
                Trigger::Phrase(slot) => phrases_found[*slot],
                Trigger::Word(word) => input.contains_token(word),
            };
            if hit {
                score += trigger.weight();
                triggered = true;
            }
        }

        score *= self.entry.priority;
        let score = adjust_for_negation(&self.entry.category, score, input.is_negated());

        trace!(
            category = %self.entry.category,
            score,
            triggered,
            negated = input.is_negated(),
            "Scored pattern entry"
        );

        MatchResult { score, triggered }
    }

    fn phrases_found(&self, text: &str) -> Vec<bool> {
        let mut found = vec![false; self.phrase_count];
        if let Some(phrases) = &self.phrases {
            for m in phrases.find_overlapping_iter(text) {
                found[m.pattern().as_usize()] = true;
            }
        }
        found
    }
}
