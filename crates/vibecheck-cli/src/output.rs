//! Text rendering for pipeline results and metrics

use std::fmt::Write;
use vibecheck_core::{PatternEntry, PipelineResult};
use vibecheck_engine::{ScoredEntry, SentimentLexicon};
use vibecheck_telemetry::MetricsSnapshot;

/// One-line summary followed by the response
pub fn format_result(result: &PipelineResult) -> String {
    if !result.matched {
        return format!(
            "[{}] \"{}\" confidence {}%\n  {}",
            result.category, result.input, result.confidence, result.response
        );
    }

    format!(
        "[{}] \"{}\" confidence {}% (score {:.2}, sentiment {:+})\n  {}",
        result.category,
        result.input,
        result.confidence,
        result.engine_score,
        result.sentiment.score,
        result.response
    )
}

pub fn format_json(result: &PipelineResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

/// Per-entry scores, one line each
pub fn format_explain(scored: &[ScoredEntry<'_>]) -> String {
    let mut out = String::new();
    for entry in scored {
        let marker = if entry.result.triggered { "*" } else { " " };
        let _ = writeln!(
            out,
            "  {marker} {:<12} {:>6.2}",
            entry.entry.category, entry.result.score
        );
    }
    out
}

pub fn format_pattern(entry: &PatternEntry) -> String {
    format!(
        "{:<12} x{:<4} {}",
        entry.category,
        entry.priority,
        entry.triggers.join(", ")
    )
}

/// Size of the loaded tables
pub fn format_tables(patterns: usize, synonyms: usize, lexicon: &SentimentLexicon) -> String {
    format!(
        "{patterns} patterns, {synonyms} synonyms, {} positive / {} negative lexicon words",
        lexicon.positive.len(),
        lexicon.negative.len()
    )
}

pub fn format_stats(snapshot: &MetricsSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "runs: {} matched: {} unmatched: {} match rate: {:.0}% avg confidence: {:.1}",
        snapshot.total_runs,
        snapshot.matched_runs,
        snapshot.unmatched_runs,
        snapshot.match_rate() * 100.0,
        snapshot.avg_confidence()
    );
    for (category, count) in &snapshot.categories {
        let _ = writeln!(out, "  {category:<12} {count}");
    }
    out
}
