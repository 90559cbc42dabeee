//! Rule-based keyword tagger.
//!
//! A lightweight stand-in for a full NLP pipeline: whitespace
//! tokenization with punctuation stripping, an embedded English stop
//! list, and suffix/capitalization heuristics for part-of-speech. Loaded
//! once at startup and shared read-only, like the embedding backend.

use quizcraft_core::traits::{KeywordExtractor, PosTag, TaggedToken};

/// Common English stop words. Matched case-insensitively.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me",
    "might", "more", "most", "must", "my", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "upon", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your", "yours",
];

/// Suffixes that mark a token as a (likely) verb form.
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ify", "ize", "ise"];

/// Rule-based implementation of [`KeywordExtractor`].
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn classify(token: &str, is_alpha: bool, is_stop: bool) -> PosTag {
        if !is_alpha || is_stop || token.chars().count() < 2 {
            return PosTag::Other;
        }
        if token.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::ProperNoun;
        }
        if VERB_SUFFIXES.iter().any(|s| token.ends_with(s)) {
            return PosTag::Verb;
        }
        PosTag::Noun
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor for RuleTagger {
    fn name(&self) -> &str {
        "rule-tagger"
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .filter_map(|raw| {
                let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
                if token.is_empty() {
                    return None;
                }
                let is_alpha = token.chars().all(char::is_alphabetic);
                let is_stop = STOP_WORDS
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(token));
                let pos = Self::classify(token, is_alpha, is_stop);
                Some(TaggedToken {
                    text: token.to_string(),
                    pos,
                    is_alpha,
                    is_stop,
                })
            })
            .collect()
    }
}
