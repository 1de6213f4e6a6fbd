//! Built-in pattern set and sentiment lexicon

use crate::sentiment::SentimentLexicon;
use vibecheck_core::PatternEntry;

/// Pattern entries used when no pattern list is configured
pub fn builtin_patterns() -> Vec<PatternEntry> {
    vec![
        PatternEntry::new(
            "sad",
            [
                "sad",
                "depressed",
                "lonely",
                "heartbroken",
                "crying",
                "feeling down",
                "feel down",
                "kinda sad",
            ],
            "Sending a virtual hug. It's okay to feel low, want to talk about it?",
        )
        .with_priority(1.2),
        PatternEntry::new(
            "angry",
            [
                "angry",
                "mad",
                "furious",
                "annoying",
                "pissed",
                "fed up",
                "so annoying",
            ],
            "Deep breath. Want to vent about what set you off?",
        )
        .with_priority(1.1),
        PatternEntry::new(
            "hype",
            ["hyped", "pumped", "stoked", "lets go", "lets goo", "hype"],
            "LET'S GOOO! That energy is contagious!",
        ),
        PatternEntry::new(
            "anxious",
            ["anxious", "nervous", "worried", "stressed", "freaking out"],
            "One thing at a time. You've got this.",
        ),
        PatternEntry::new(
            "chill",
            ["chill", "relaxed", "vibing", "all good", "no worries"],
            "Immaculate vibes. Keep cruising.",
        )
        .with_priority(0.8),
        PatternEntry::new(
            "tired",
            ["tired", "exhausted", "sleepy", "drained", "burnt out"],
            "Rest is productive too. Grab some sleep.",
        ),
    ]
}

/// Lexicon used when none is configured
pub fn builtin_lexicon() -> SentimentLexicon {
    SentimentLexicon::new(
        [
            "good", "great", "awesome", "amazing", "love", "happy", "excited", "fun", "nice",
            "best", "fantastic", "glad", "yay", "wonderful", "cool",
        ],
        [
            "bad", "sad", "terrible", "awful", "hate", "angry", "furious", "worst", "annoying",
            "upset", "horrible", "lonely", "depressed", "miserable", "tired",
        ],
    )
}
