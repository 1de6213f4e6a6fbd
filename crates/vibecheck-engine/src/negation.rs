//! Negation handling for negation-sensitive categories

/// Tokens that mark an input as negated
pub const NEGATORS: [&str; 4] = ["not", "no", "never", "nah"];

/// True if any token is a negator
pub fn detect_negation<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|t| NEGATORS.contains(&t.as_ref()))
}

/// How a negated input affects a category's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NegationRule {
    /// Score forced to zero
    Suppress,
    /// Score multiplied by the factor
    Dampen(f64),
    /// Score unchanged
    Ignore,
}

impl NegationRule {
    /// Rule for a category: "sad" is fully negatable, "angry" only partially
    pub fn for_category(category: &str) -> Self {
        match category {
            "sad" => Self::Suppress,
            "angry" => Self::Dampen(0.3),
            _ => Self::Ignore,
        }
    }

    pub fn apply(self, score: f64) -> f64 {
        match self {
            Self::Suppress => 0.0,
            Self::Dampen(factor) => score * factor,
            Self::Ignore => score,
        }
    }
}

/// Adjust `score` for `category` when the input is negated
pub fn adjust_for_negation(category: &str, score: f64, negated: bool) -> f64 {
    if negated {
        NegationRule::for_category(category).apply(score)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_negation() {
        assert!(detect_negation(&["im", "not", "sad"]));
        assert!(detect_negation(&["nah".to_string()]));
        assert!(!detect_negation(&["nothing", "know"]));
        assert!(!detect_negation::<&str>(&[]));
    }

    #[test]
    fn test_negation_policy_is_category_specific() {
        assert_eq!(adjust_for_negation("sad", 4.5, true), 0.0);
        assert!((adjust_for_negation("angry", 3.0, true) - 0.9).abs() < 1e-9);
        assert_eq!(adjust_for_negation("hype", 3.0, true), 3.0);
        assert_eq!(adjust_for_negation("sad", 4.5, false), 4.5);
    }
}
