//! Selection of the winning pattern entry
//!
//! Entries are always scored sequentially in configured order. Ties on the
//! top score go to the entry evaluated first, so the order is part of the
//! matching contract.

use crate::matcher::CompiledPattern;
use crate::normalizer::{punctuation_regex, NormalizedInput};
use vibecheck_core::{MatchResult, PatternEntry, Result};

/// One entry's score for an input
#[derive(Debug, Clone, Copy)]
pub struct ScoredEntry<'a> {
    pub entry: &'a PatternEntry,
    pub result: MatchResult,
}

/// Pick the triggered entry with the strictly highest positive score.
///
/// The first entry reaching the top score wins; entries whose score was
/// negated down to zero can never be selected.
pub fn select_best<'a, I>(scored: I) -> Option<ScoredEntry<'a>>
where
    I: IntoIterator<Item = ScoredEntry<'a>>,
{
    let mut best: Option<ScoredEntry<'a>> = None;
    let mut best_score = 0.0;

    for candidate in scored {
        if candidate.result.triggered && candidate.result.score > best_score {
            best_score = candidate.result.score;
            best = Some(candidate);
        }
    }

    best
}

/// Ordered set of compiled pattern entries
pub struct Selector {
    patterns: Vec<CompiledPattern>,
}

impl Selector {
    /// Compile every entry, preserving list order
    pub fn new(entries: Vec<PatternEntry>) -> Result<Self> {
        let punctuation = punctuation_regex()?;
        let patterns = entries
            .into_iter()
            .map(|entry| CompiledPattern::with_punctuation(entry, &punctuation))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Configured entries in evaluation order
    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.patterns.iter().map(CompiledPattern::entry)
    }

    /// Score the input against every entry, in configured order
    pub fn score_all(&self, input: &NormalizedInput) -> Vec<ScoredEntry<'_>> {
        self.patterns
            .iter()
            .map(|pattern| ScoredEntry {
                entry: pattern.entry(),
                result: pattern.score(input),
            })
            .collect()
    }

    /// Best entry for the input, if any triggered with a positive score
    pub fn select(&self, input: &NormalizedInput) -> Option<ScoredEntry<'_>> {
        select_best(self.score_all(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{Normalizer, SynonymTable};

    fn analyze(text: &str) -> NormalizedInput {
        Normalizer::new(SynonymTable::new()).unwrap().analyze(text)
    }

    #[test]
    fn test_highest_score_wins() {
        let selector = Selector::new(vec![
            PatternEntry::new("chill", ["vibe"], "nice"),
            PatternEntry::new("hype", ["hyped", "lets go"], "LETS GO"),
        ])
        .unwrap();

        let best = selector.select(&analyze("lets go im hyped, good vibes")).unwrap();
        assert_eq!(best.entry.category, "hype");
        assert_eq!(best.result.score, 4.5);
    }

    #[test]
    fn test_ties_go_to_first_entry() {
        let selector = Selector::new(vec![
            PatternEntry::new("chill", ["vibe"], "nice"),
            PatternEntry::new("hype", ["vibe"], "LETS GO"),
        ])
        .unwrap();

        let best = selector.select(&analyze("vibes")).unwrap();
        assert_eq!(best.entry.category, "chill");
    }

    #[test]
    fn test_score_all_preserves_order() {
        let selector = Selector::new(vec![
            PatternEntry::new("sad", ["sad"], "hugs"),
            PatternEntry::new("angry", ["mad"], "breathe"),
            PatternEntry::new("hype", ["hyped"], "LETS GO"),
        ])
        .unwrap();

        let scored = selector.score_all(&analyze("so mad"));
        let categories: Vec<_> = scored.iter().map(|s| s.entry.category.as_str()).collect();
        assert_eq!(categories, vec!["sad", "angry", "hype"]);
        assert!(scored[1].result.triggered);
        assert!(!scored[0].result.triggered);
    }

    #[test]
    fn test_negated_entry_is_never_selected() {
        let selector = Selector::new(vec![PatternEntry::new("sad", ["sad"], "hugs")]).unwrap();

        assert!(selector.select(&analyze("I'm not sad at all")).is_none());
    }

    #[test]
    fn test_empty_selector_never_matches() {
        let selector = Selector::new(Vec::new()).unwrap();
        assert!(selector.is_empty());
        assert!(selector.select(&analyze("anything at all")).is_none());
    }

    #[test]
    fn test_select_best_ignores_untriggered() {
        let entry = PatternEntry::new("hype", ["hyped"], "LETS GO");
        let scored = vec![ScoredEntry {
            entry: &entry,
            result: MatchResult {
                score: 2.0,
                triggered: false,
            },
        }];

        assert!(select_best(scored).is_none());
    }
}
