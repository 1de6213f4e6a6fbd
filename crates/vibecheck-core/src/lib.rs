//! VibeCheck Core
//!
//! Core types, traits, and utilities shared across VibeCheck components.
//!
//! This crate provides:
//! - The data model for pattern entries, match scores, sentiment and results
//! - Error types and result handling
//! - The metrics observer contract invoked once per pipeline run

pub mod error;
pub mod observer;
pub mod types;

pub use error::{Error, Result};
pub use observer::{MetricsObserver, NoopObserver};
pub use types::{
    MatchResult, MetricsRecord, PatternEntry, PipelineResult, SentimentResult, NO_MATCH_CATEGORY,
    NO_MATCH_RESPONSE,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::observer::{MetricsObserver, NoopObserver};
    pub use crate::types::{MatchResult, MetricsRecord, PatternEntry, PipelineResult, SentimentResult};
}
