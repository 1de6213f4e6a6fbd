//! Confidence blending and contradiction penalties

/// Confidence reported for input that matched no entry
pub const FALLBACK_CONFIDENCE: u8 = 15;

const ENGINE_WEIGHT: f64 = 0.7;
const SENTIMENT_WEIGHT: f64 = 0.2;
const PRIORITY_WEIGHT: f64 = 0.1;

/// Divisor applied before squashing the engine score with `tanh`
const ENGINE_SCALE: f64 = 4.0;

/// Blend match strength, sentiment polarity and category priority into 0-100
pub fn compute_confidence(engine_score: f64, sentiment_polarity: f64, category_priority: f64) -> u8 {
    let normalized_engine = (engine_score / ENGINE_SCALE).tanh();
    let raw = ENGINE_WEIGHT * normalized_engine
        + SENTIMENT_WEIGHT * sentiment_polarity
        + PRIORITY_WEIGHT * (category_priority / 2.0);

    to_percent((raw + 1.0) / 2.0 * 100.0)
}

fn to_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Lowered trust when the sentiment lexicon disagrees with the category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContradictionRule {
    pub categories: &'static [&'static str],
    pub condition: PolarityCondition,
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolarityCondition {
    Above(f64),
    Below(f64),
}

impl PolarityCondition {
    fn holds(self, polarity: f64) -> bool {
        match self {
            Self::Above(threshold) => polarity > threshold,
            Self::Below(threshold) => polarity < threshold,
        }
    }
}

/// Negative categories with clearly positive sentiment, and hype with
/// clearly negative sentiment.
pub const CONTRADICTION_RULES: &[ContradictionRule] = &[
    ContradictionRule {
        categories: &["sad", "angry"],
        condition: PolarityCondition::Above(0.5),
        factor: 0.55,
    },
    ContradictionRule {
        categories: &["hype"],
        condition: PolarityCondition::Below(-0.4),
        factor: 0.6,
    },
];

impl ContradictionRule {
    fn applies(&self, category: &str, polarity: f64) -> bool {
        self.categories.contains(&category) && self.condition.holds(polarity)
    }
}

/// Apply the first contradiction rule matching `category` and `polarity`
pub fn apply_contradiction_penalty(category: &str, polarity: f64, confidence: u8) -> u8 {
    CONTRADICTION_RULES
        .iter()
        .find(|rule| rule.applies(category, polarity))
        .map(|rule| to_percent(f64::from(confidence) * rule.factor))
        .unwrap_or(confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_match_with_neutral_sentiment() {
        // tanh(0.375) ~ 0.3583; 0.7 * 0.3583 + 0.05 ~ 0.3008
        assert_eq!(compute_confidence(1.5, 0.0, 1.0), 65);
    }

    #[test]
    fn test_phrase_match() {
        // tanh(0.75) ~ 0.6351; raw ~ 0.4946
        assert_eq!(compute_confidence(3.0, 0.0, 1.0), 75);
    }

    #[test]
    fn test_sentiment_and_priority_contribute() {
        assert_eq!(compute_confidence(0.0, 0.0, 0.0), 50);
        assert_eq!(compute_confidence(0.0, 1.0, 0.0), 60);
        assert_eq!(compute_confidence(0.0, -1.0, 0.0), 40);
        assert_eq!(compute_confidence(0.0, 0.0, 2.0), 55);
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(compute_confidence(1e9, 1.0, 100.0), 100);
        assert_eq!(compute_confidence(0.0, -1.0, -100.0), 0);
        assert_eq!(compute_confidence(f64::NAN, 0.0, 1.0), 0);
    }

    #[test]
    fn test_contradiction_penalties() {
        assert_eq!(apply_contradiction_penalty("sad", 0.75, 70), 39);
        assert_eq!(apply_contradiction_penalty("angry", 1.0, 80), 44);
        assert_eq!(apply_contradiction_penalty("hype", -0.5, 70), 42);
    }

    #[test]
    fn test_contradiction_thresholds_are_strict() {
        assert_eq!(apply_contradiction_penalty("sad", 0.5, 70), 70);
        assert_eq!(apply_contradiction_penalty("hype", -0.4, 70), 70);
        assert_eq!(apply_contradiction_penalty("chill", 1.0, 70), 70);
        assert_eq!(apply_contradiction_penalty("hype", 1.0, 70), 70);
    }
}
