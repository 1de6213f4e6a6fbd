//! Property tests for scoring invariants

use proptest::prelude::*;
use vibecheck_core::{PatternEntry, NO_MATCH_CATEGORY};
use vibecheck_engine::{
    compute_confidence, polarity, stem, CompiledPattern, Normalizer, SynonymTable, VibePipeline,
    NEGATORS,
};

proptest! {
    #[test]
    fn confidence_stays_in_range(input in ".{0,80}") {
        let pipeline = VibePipeline::new().unwrap();
        let result = pipeline.run(&input);
        prop_assert!(result.ok);
        prop_assert!(result.confidence <= 100);
        prop_assert!(result.engine_score >= 0.0);
    }

    #[test]
    fn blend_is_bounded(
        engine_score in 0.0f64..1e6,
        sentiment_polarity in -1.0f64..=1.0,
        priority in 0.01f64..10.0,
    ) {
        prop_assert!(compute_confidence(engine_score, sentiment_polarity, priority) <= 100);
    }

    #[test]
    fn input_without_triggers_falls_back(input in "[qxz ]{0,40}") {
        let pipeline = VibePipeline::new().unwrap();
        let result = pipeline.run(&input);
        prop_assert!(!result.matched);
        prop_assert_eq!(result.category.as_str(), NO_MATCH_CATEGORY);
        prop_assert_eq!(result.confidence, 15);
    }

    #[test]
    fn stem_is_deterministic_suffix_strip(word in "[a-z]{0,12}") {
        let stemmed = stem(&word);
        prop_assert_eq!(stemmed, stem(&word));
        prop_assert!(word.starts_with(stemmed));
        prop_assert!(word.len() - stemmed.len() <= 5);
    }

    #[test]
    fn negated_sadness_scores_zero(
        before in prop::collection::vec("[a-z]{1,8}", 0..5),
        after in prop::collection::vec("[a-z]{1,8}", 0..5),
        negator in prop::sample::select(NEGATORS.to_vec()),
    ) {
        let pattern = CompiledPattern::new(PatternEntry::new("sad", ["sad"], "hugs")).unwrap();
        let normalizer = Normalizer::new(SynonymTable::new()).unwrap();

        let text = format!("{} {} sad {}", before.join(" "), negator, after.join(" "));
        let result = pattern.score(&normalizer.analyze(&text));

        prop_assert!(result.triggered);
        prop_assert_eq!(result.score, 0.0);
    }

    #[test]
    fn polarity_saturates(score in 4i64..1000) {
        prop_assert_eq!(polarity(score), 1.0);
        prop_assert_eq!(polarity(-score), -1.0);
    }

    #[test]
    fn runs_are_deterministic(input in ".{0,60}") {
        let pipeline = VibePipeline::new().unwrap();
        prop_assert_eq!(pipeline.run(&input), pipeline.run(&input));
    }
}
