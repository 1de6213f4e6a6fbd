//! Core types for VibeCheck

use serde::{Deserialize, Serialize};

/// Category reported when no pattern entry triggered
pub const NO_MATCH_CATEGORY: &str = "none";

/// Response reported when no pattern entry triggered
pub const NO_MATCH_RESPONSE: &str = "No detectable vibe signature.";

fn default_priority() -> f64 {
    1.0
}

/// A vibe category together with the trigger phrases that select it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Category tag, e.g. "sad" or "hype"
    pub category: String,

    /// Trigger words or multi-word phrases, in evaluation order
    #[serde(default)]
    pub triggers: Vec<String>,

    /// Response text returned when this entry wins
    #[serde(default)]
    pub response: String,

    /// Score multiplier for this entry
    #[serde(default = "default_priority")]
    pub priority: f64,
}

impl PatternEntry {
    /// Create a new entry with priority 1
    pub fn new<I, S>(category: impl Into<String>, triggers: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            triggers: triggers.into_iter().map(Into::into).collect(),
            response: response.into(),
            priority: default_priority(),
        }
    }

    /// Set the priority multiplier
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }
}

/// Score of one input against one pattern entry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Accumulated trigger weight after priority and negation
    pub score: f64,

    /// Whether any trigger fired, regardless of negation
    pub triggered: bool,
}

/// Lexicon-based sentiment estimate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    /// `pos_count - neg_count`
    pub score: i64,

    /// Score scaled into [-1, 1], saturating at a difference of four
    pub polarity: f64,

    pub pos_count: usize,

    pub neg_count: usize,
}

/// Outcome of a single pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub ok: bool,

    /// Whether any pattern entry was selected
    pub matched: bool,

    /// Trimmed, whitespace-collapsed input
    pub input: String,

    /// Winning category, or [`NO_MATCH_CATEGORY`]
    pub category: String,

    pub response: String,

    /// Confidence percentage (0-100)
    pub confidence: u8,

    /// Raw score of the winning entry
    pub engine_score: f64,

    pub sentiment: SentimentResult,
}

impl PipelineResult {
    /// Fallback result for input that matched no pattern entry
    pub fn unmatched(input: impl Into<String>, confidence: u8) -> Self {
        Self {
            ok: true,
            matched: false,
            input: input.into(),
            category: NO_MATCH_CATEGORY.to_string(),
            response: NO_MATCH_RESPONSE.to_string(),
            confidence,
            engine_score: 0.0,
            sentiment: SentimentResult::default(),
        }
    }
}

/// Record handed to the metrics observer after every run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    pub input: String,

    pub matched: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl MetricsRecord {
    /// Record for a run that matched nothing; carries no scoring fields
    pub fn unmatched(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            matched: false,
            category: None,
            confidence: None,
            engine_score: None,
            sentiment: None,
            timestamp: now_millis(),
        }
    }

    /// Record mirroring a matched pipeline result
    pub fn matched(result: &PipelineResult) -> Self {
        Self {
            input: result.input.clone(),
            matched: true,
            category: Some(result.category.clone()),
            confidence: Some(result.confidence),
            engine_score: Some(result.engine_score),
            sentiment: Some(result.sentiment),
            timestamp: now_millis(),
        }
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
