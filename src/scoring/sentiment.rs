// Lexicon-based sentiment scoring.
//
// Each token is looked up in an AFINN-style word list with integer weights
// in [-5, 5]; the weights are summed into a raw score. A token directly
// preceded by a negator ("not", "don't", ...) has its weight flipped.
//
// The normalized score is (raw + 5) / 10 and is not clamped:
// longer texts with many charged words push it outside [0, 1].

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9']+").unwrap());

const NEGATORS: &[&str] = &[
    "not", "no", "never", "cannot", "cant", "can't", "don't", "dont", "doesn't", "doesnt",
    "didn't", "didnt", "won't", "wont", "isn't", "isnt", "aren't", "arent", "wasn't",
    "wasnt", "shouldn't", "wouldn't", "couldn't", "nobody", "nothing", "neither",
];

const LEXICON: &[(&str, i32)] = &[
    // Strongly negative
    ("kill", -3),
    ("killed", -3),
    ("murder", -2),
    ("die", -3),
    ("dead", -3),
    ("hate", -3),
    ("hated", -3),
    ("hateful", -3),
    ("loser", -3),
    ("worthless", -2),
    ("pathetic", -2),
    ("disgusting", -3),
    ("stupid", -2),
    ("idiot", -3),
    ("moron", -3),
    ("ugly", -3),
    ("fat", -2),
    ("freak", -2),
    ("trash", -2),
    ("garbage", -2),
    ("bastard", -5),
    ("bitch", -5),
    ("damn", -4),
    ("hell", -4),
    ("fuck", -4),
    ("shit", -4),
    ("threat", -2),
    ("threaten", -2),
    ("threatened", -2),
    ("hurt", -2),
    ("harass", -3),
    ("harassed", -2),
    ("harassment", -3),
    ("bully", -2),
    ("bullied", -2),
    ("bullying", -2),
    ("abuse", -3),
    ("abusive", -3),
    ("attack", -1),
    ("attacked", -1),
    ("scared", -2),
    ("afraid", -2),
    ("fear", -2),
    ("terrible", -3),
    ("awful", -3),
    ("horrible", -3),
    ("sad", -2),
    ("lonely", -2),
    ("alone", -2),
    ("cry", -1),
    ("crying", -2),
    ("shame", -2),
    ("humiliated", -3),
    ("embarrassed", -2),
    ("angry", -3),
    ("anxious", -2),
    ("anxiety", -2),
    ("depressed", -2),
    ("miserable", -3),
    ("suck", -3),
    ("sucks", -3),
    ("bad", -3),
    ("worst", -3),
    ("wrong", -2),
    ("fake", -3),
    ("liar", -3),
    ("lose", -3),
    ("nobody", -1),
    ("no", -1),
    // Positive
    ("safe", 1),
    ("safety", 1),
    ("support", 2),
    ("supported", 2),
    ("help", 2),
    ("helpful", 2),
    ("thanks", 2),
    ("thank", 2),
    ("kind", 2),
    ("care", 2),
    ("friend", 1),
    ("friends", 1),
    ("love", 3),
    ("loved", 3),
    ("like", 2),
    ("good", 3),
    ("great", 3),
    ("nice", 3),
    ("happy", 3),
    ("calm", 2),
    ("better", 2),
    ("best", 3),
    ("brave", 2),
    ("strong", 2),
    ("proud", 2),
    ("hope", 2),
    ("awesome", 4),
    ("amazing", 4),
    ("wonderful", 4),
    ("beautiful", 3),
    ("respect", 2),
    ("welcome", 2),
    ("yes", 1),
];

/// Raw and normalized sentiment of one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Sum of lexicon weights (unbounded, signed)
    pub raw: i32,
    /// (raw + 5) / 10, not clamped
    pub normalized: f64,
}

/// Sentiment scorer backed by a static word list.
pub struct SentimentScorer {
    words: HashMap<&'static str, i32>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            words: LEXICON.iter().copied().collect(),
        }
    }

    /// Score a text. Never fails; text with no known words scores 0 (0.5
    /// normalized).
    pub fn score(&self, text: &str) -> SentimentScore {
        let lower = text.to_lowercase();
        let mut raw = 0;
        let mut previous: Option<&str> = None;

        for token in TOKEN.find_iter(&lower).map(|m| m.as_str()) {
            if let Some(&weight) = self.words.get(token) {
                let negated = previous.is_some_and(|p| NEGATORS.contains(&p));
                raw += if negated { -weight } else { weight };
            }
            previous = Some(token);
        }

        SentimentScore {
            raw,
            normalized: (raw as f64 + 5.0) / 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_text_normalizes_to_half() {
        let s = SentimentScorer::new().score("The meeting is on Tuesday");
        assert_eq!(s.raw, 0);
        assert!((s.normalized - 0.5).abs() < 1e-9);
    }

    #[test]
    fn negative_words_sum() {
        let s = SentimentScorer::new().score("You are a stupid loser");
        assert_eq!(s.raw, -5);
        assert!((s.normalized - 0.0).abs() < 1e-9);
    }

    #[test]
    fn negation_flips_following_word() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("good").raw, 3);
        assert_eq!(scorer.score("not good").raw, -3);
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        let s = SentimentScorer::new().score("HATE!!! hate... Hate?");
        assert_eq!(s.raw, -9);
    }

    #[test]
    fn extreme_text_is_not_clamped() {
        let s = SentimentScorer::new().score("awesome amazing wonderful love");
        assert_eq!(s.raw, 15);
        assert!(s.normalized > 1.0);
    }
}
