//! VibeCheck Engine
//!
//! Classifies short free-text inputs into emotional "vibe" categories.
//!
//! A run passes through these stages:
//! - Normalization: whitespace folding, suffix stemming, synonym mapping
//! - Matching: weighted trigger scoring per pattern entry, with negation
//! - Selection: highest triggered score wins, first entry on ties
//! - Sentiment: lexicon token counts scaled to a polarity
//! - Confidence: blend of match strength, polarity and priority, with
//!   contradiction penalties
//!
//! Everything runs synchronously over tables fixed at construction.

pub mod confidence;
pub mod config;
pub mod defaults;
pub mod matcher;
pub mod negation;
pub mod normalizer;
pub mod pipeline;
pub mod selector;
pub mod sentiment;

pub use confidence::{apply_contradiction_penalty, compute_confidence, FALLBACK_CONFIDENCE};
pub use config::{load_lexicon_json, load_patterns_json, load_synonyms_json, VibeConfig};
pub use defaults::{builtin_lexicon, builtin_patterns};
pub use matcher::CompiledPattern;
pub use negation::{detect_negation, NegationRule, NEGATORS};
pub use normalizer::{preprocess, stem, tokenize, NormalizedInput, Normalizer, SynonymTable};
pub use pipeline::{PipelineBuilder, VibePipeline};
pub use selector::{select_best, ScoredEntry, Selector};
pub use sentiment::{polarity, SentimentEstimator, SentimentLexicon};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::VibeConfig;
    pub use crate::pipeline::{PipelineBuilder, VibePipeline};
    pub use crate::sentiment::SentimentLexicon;
    pub use vibecheck_core::prelude::*;
}
