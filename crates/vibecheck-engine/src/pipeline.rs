//! Vibe pipeline orchestration
//!
//! A run is a single pass:
//! - preprocess the raw input
//! - score every pattern entry and select the winner
//! - on no winner, return the fixed fallback
//! - otherwise estimate sentiment, blend confidence and apply contradiction penalties
//! - hand a metrics record to the observer
//!
//! Every table is fixed at construction, so a pipeline can be shared across
//! threads and repeated runs on the same input give the same result.

use crate::config::VibeConfig;
use crate::confidence::{apply_contradiction_penalty, compute_confidence, FALLBACK_CONFIDENCE};
use crate::defaults::{builtin_lexicon, builtin_patterns};
use crate::normalizer::{preprocess, Normalizer, SynonymTable};
use crate::selector::{ScoredEntry, Selector};
use crate::sentiment::{SentimentEstimator, SentimentLexicon};
use std::sync::Arc;
use tracing::{debug, warn};
use vibecheck_core::{
    MetricsObserver, MetricsRecord, NoopObserver, PatternEntry, PipelineResult, Result,
};

/// Classifies short inputs into vibe categories
pub struct VibePipeline {
    normalizer: Normalizer,
    selector: Selector,
    sentiment: SentimentEstimator,
    observer: Arc<dyn MetricsObserver>,
}

impl VibePipeline {
    /// Pipeline over the built-in patterns and lexicon, with no observer
    pub fn new() -> Result<Self> {
        PipelineBuilder::new().build()
    }

    /// Pipeline over the tables of a config
    pub fn from_config(config: VibeConfig) -> Result<Self> {
        PipelineBuilder::from_config(config).build()
    }

    /// Number of configured pattern entries
    pub fn pattern_count(&self) -> usize {
        self.selector.len()
    }

    /// Configured pattern entries in evaluation order
    pub fn patterns(&self) -> impl Iterator<Item = &PatternEntry> {
        self.selector.entries()
    }

    pub fn synonym_count(&self) -> usize {
        self.normalizer.synonym_count()
    }

    /// Lexicon used for sentiment estimation
    pub fn lexicon(&self) -> &SentimentLexicon {
        self.sentiment.lexicon()
    }

    /// Run the full pipeline on one input
    pub fn run(&self, raw: &str) -> PipelineResult {
        let input = preprocess(raw);
        let normalized = self.normalizer.analyze(&input);

        let Some(best) = self.selector.select(&normalized) else {
            debug!(input = %input, "No pattern entry matched");
            self.emit(&MetricsRecord::unmatched(input.as_str()));
            return PipelineResult::unmatched(input, FALLBACK_CONFIDENCE);
        };

        let sentiment = self.sentiment.estimate(&input);

        let entry = best.entry;
        let confidence = compute_confidence(best.result.score, sentiment.polarity, entry.priority);
        let final_confidence =
            apply_contradiction_penalty(&entry.category, sentiment.polarity, confidence);

        if final_confidence != confidence {
            debug!(
                category = %entry.category,
                polarity = sentiment.polarity,
                confidence,
                final_confidence,
                "Sentiment contradicts category, confidence lowered"
            );
        }

        debug!(
            category = %entry.category,
            engine_score = best.result.score,
            confidence = final_confidence,
            "Selected pattern entry"
        );

        let result = PipelineResult {
            ok: true,
            matched: true,
            input,
            category: entry.category.clone(),
            response: entry.response.clone(),
            confidence: final_confidence,
            engine_score: best.result.score,
            sentiment,
        };

        self.emit(&MetricsRecord::matched(&result));

        result
    }

    /// Run on input that may be absent; absent input is treated as empty
    pub fn run_optional(&self, raw: Option<&str>) -> PipelineResult {
        self.run(raw.unwrap_or_default())
    }

    /// Per-entry scores for an input, in evaluation order
    pub fn explain(&self, raw: &str) -> Vec<ScoredEntry<'_>> {
        let normalized = self.normalizer.analyze(&preprocess(raw));
        self.selector.score_all(&normalized)
    }

    fn emit(&self, record: &MetricsRecord) {
        if let Err(e) = self.observer.observe(record) {
            warn!(error = %e, "Metrics observer failed");
        }
    }
}

/// Builder for constructing pipelines fluently
pub struct PipelineBuilder {
    patterns: Vec<PatternEntry>,
    synonyms: SynonymTable,
    lexicon: SentimentLexicon,
    observer: Arc<dyn MetricsObserver>,
}

impl PipelineBuilder {
    /// Builder with built-in patterns and lexicon, no synonyms and no observer
    pub fn new() -> Self {
        Self {
            patterns: builtin_patterns(),
            synonyms: SynonymTable::new(),
            lexicon: builtin_lexicon(),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Builder seeded from a config
    pub fn from_config(config: VibeConfig) -> Self {
        Self {
            patterns: config.patterns,
            synonyms: config.synonyms,
            lexicon: config.lexicon,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Replace the pattern list
    pub fn patterns(mut self, patterns: Vec<PatternEntry>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Append one pattern entry
    pub fn pattern(mut self, entry: PatternEntry) -> Self {
        self.patterns.push(entry);
        self
    }

    /// Replace the synonym table
    pub fn synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Add one synonym mapping
    pub fn synonym(mut self, token: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.synonyms.insert(token.into(), canonical.into());
        self
    }

    /// Replace the sentiment lexicon
    pub fn lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Set the metrics observer
    pub fn observer(self, observer: impl MetricsObserver + 'static) -> Self {
        self.shared_observer(Arc::new(observer))
    }

    /// Set an observer that is also held elsewhere
    pub fn shared_observer(mut self, observer: Arc<dyn MetricsObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Compile the tables into a pipeline
    pub fn build(self) -> Result<VibePipeline> {
        let selector = Selector::new(self.patterns)?;
        debug!(
            patterns = selector.len(),
            synonyms = self.synonyms.len(),
            "Built vibe pipeline"
        );

        Ok(VibePipeline {
            normalizer: Normalizer::new(self.synonyms)?,
            selector,
            sentiment: SentimentEstimator::new(self.lexicon)?,
            observer: self.observer,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
