//! Question synthesizer: keyword extraction, distractor pools, and
//! templated MCQ / descriptive question construction.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SynthError;
use crate::model::Question;
use crate::traits::{KeywordExtractor, PosTag};

/// Default cap on keywords extracted from one context.
pub const DEFAULT_KEYWORD_LIMIT: usize = 15;

/// Wrong options presented alongside the correct answer in an MCQ.
pub const DISTRACTORS_PER_MCQ: usize = 3;

/// Extract up to `limit` content keywords from `text`, in first-occurrence
/// order.
///
/// Keeps tokens that are alphabetic, not stop words, and tagged as a
/// noun, verb, or proper noun; duplicates (exact text) are dropped.
pub fn extract_keywords(tagger: &dyn KeywordExtractor, text: &str, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for token in tagger.tag(text) {
        if keywords.len() >= limit {
            break;
        }
        if !token.is_alpha || token.is_stop {
            continue;
        }
        if !matches!(token.pos, PosTag::Noun | PosTag::Verb | PosTag::ProperNoun) {
            continue;
        }
        if seen.insert(token.text.clone()) {
            keywords.push(token.text);
        }
    }

    keywords
}

/// Title-case a keyword: first letter of each word uppercased, the rest
/// lowercased.
pub fn title_case(word: &str) -> String {
    word.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pick `n` distinct title-cased distractors for `correct` from the
/// keyword pool.
///
/// The pool is deduplicated up front (case-insensitively, excluding the
/// correct answer), shuffled with the caller's rng, and the first `n`
/// taken — provably terminating, and deterministic under a seeded rng.
/// A pool with fewer than `n` usable candidates is rejected instead of
/// being sampled forever.
pub fn generate_distractors(
    correct: &str,
    keywords: &[String],
    n: usize,
    rng: &mut impl Rng,
) -> Result<Vec<String>, SynthError> {
    let correct_lower = correct.to_lowercase();
    let mut seen = HashSet::new();
    let mut pool: Vec<String> = Vec::new();

    for kw in keywords {
        if kw.to_lowercase() == correct_lower {
            continue;
        }
        let candidate = title_case(kw);
        if seen.insert(candidate.to_lowercase()) {
            pool.push(candidate);
        }
    }

    if pool.len() < n {
        return Err(SynthError::InsufficientDistractorPool {
            needed: n,
            available: pool.len(),
        });
    }

    pool.shuffle(rng);
    pool.truncate(n);
    Ok(pool)
}

/// Build up to `count` multiple-choice questions from `context`.
///
/// Keywords are consumed in extraction order; each question pairs three
/// distractors with the title-cased keyword and shuffles the options.
/// Generation stops early when the keywords run out, or when the pool
/// cannot supply three distractors — pool size is a property of the
/// whole context, so later keywords would fail the same way. Callers
/// must tolerate a shorter-than-requested result.
pub fn generate_mcqs(
    tagger: &dyn KeywordExtractor,
    context: &str,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let keywords = extract_keywords(tagger, context, DEFAULT_KEYWORD_LIMIT);
    let mut mcqs = Vec::new();

    for kw in &keywords {
        if mcqs.len() >= count {
            break;
        }

        let mut options = match generate_distractors(kw, &keywords, DISTRACTORS_PER_MCQ, rng) {
            Ok(distractors) => distractors,
            Err(SynthError::InsufficientDistractorPool { needed, available }) => {
                tracing::warn!(
                    needed,
                    available,
                    built = mcqs.len(),
                    "keyword pool too small for distractors, stopping mcq generation"
                );
                break;
            }
        };

        let answer = title_case(kw);
        options.push(answer.clone());
        options.shuffle(rng);

        mcqs.push(Question::Mcq {
            question: format!("What best describes {kw}?"),
            options,
            correct_answer: answer,
        });
    }

    mcqs
}

/// Build up to `count` descriptive questions from `context`.
///
/// Takes the first `count` extracted keywords in order. The reference
/// answer is a structural placeholder; grading against it is
/// approximate by design.
pub fn generate_descriptive(
    tagger: &dyn KeywordExtractor,
    context: &str,
    count: usize,
) -> Vec<Question> {
    extract_keywords(tagger, context, DEFAULT_KEYWORD_LIMIT)
        .into_iter()
        .take(count)
        .map(|kw| Question::Descriptive {
            question: format!("Explain {kw}."),
            answer: format!("{kw} explanation based on the given context."),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::StubTagger;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn keywords_filter_stops_and_nonalpha() {
        let tagger = StubTagger::with_stops(&["the", "and"]);
        let keywords = extract_keywords(&tagger, "the kernel and scheduler use 42 pages", 15);
        assert_eq!(keywords, pool(&["kernel", "scheduler", "use", "pages"]));
    }

    #[test]
    fn keywords_dedupe_preserving_first_occurrence() {
        let tagger = StubTagger::new();
        let keywords = extract_keywords(&tagger, "kernel pages kernel frames pages", 15);
        assert_eq!(keywords, pool(&["kernel", "pages", "frames"]));
    }

    #[test]
    fn keywords_truncate_to_limit() {
        let tagger = StubTagger::new();
        let keywords = extract_keywords(&tagger, "one two three four five", 3);
        assert_eq!(keywords.len(), 3);
        assert_eq!(keywords, pool(&["one", "two", "three"]));
    }

    #[test]
    fn title_case_basics() {
        assert_eq!(title_case("kernel"), "Kernel");
        assert_eq!(title_case("CPU"), "Cpu");
        assert_eq!(title_case("virtual memory"), "Virtual Memory");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn distractors_are_distinct_and_exclude_correct() {
        let keywords = pool(&["kernel", "scheduler", "pages", "frames", "disk"]);
        let mut rng = StdRng::seed_from_u64(7);

        let distractors = generate_distractors("kernel", &keywords, 3, &mut rng).unwrap();
        assert_eq!(distractors.len(), 3);

        let mut lowered: Vec<String> = distractors.iter().map(|d| d.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), 3, "distractors must be distinct");
        assert!(!lowered.contains(&"kernel".to_string()));
    }

    #[test]
    fn distractors_exclude_correct_case_insensitively() {
        let keywords = pool(&["KERNEL", "Kernel", "scheduler", "pages", "frames"]);
        let mut rng = StdRng::seed_from_u64(1);
        let distractors = generate_distractors("kernel", &keywords, 3, &mut rng).unwrap();
        assert!(distractors.iter().all(|d| d.to_lowercase() != "kernel"));
    }

    #[test]
    fn distractors_deterministic_under_seed() {
        let keywords = pool(&["kernel", "scheduler", "pages", "frames", "disk", "inode"]);

        let first = generate_distractors("other", &keywords, 3, &mut StdRng::seed_from_u64(42));
        let second = generate_distractors("other", &keywords, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn distractors_insufficient_pool_fails_fast() {
        let keywords = pool(&["kernel", "scheduler"]);
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate_distractors("kernel", &keywords, 3, &mut rng).unwrap_err();
        match err {
            SynthError::InsufficientDistractorPool { needed, available } => {
                assert_eq!(needed, 3);
                assert_eq!(available, 1);
            }
        }
    }

    #[test]
    fn mcq_options_contain_answer_and_are_distinct() {
        let tagger = StubTagger::new();
        let context = "kernel scheduler pages frames disk inode cache buffer";
        let mut rng = StdRng::seed_from_u64(3);

        let mcqs = generate_mcqs(&tagger, context, 4, &mut rng);
        assert_eq!(mcqs.len(), 4);

        for q in &mcqs {
            match q {
                Question::Mcq {
                    question,
                    options,
                    correct_answer,
                } => {
                    assert!(question.starts_with("What best describes "));
                    assert_eq!(options.len(), 4);
                    assert!(options.contains(correct_answer));

                    let mut lowered: Vec<String> =
                        options.iter().map(|o| o.to_lowercase()).collect();
                    lowered.sort();
                    lowered.dedup();
                    assert_eq!(lowered.len(), 4, "options must be case-insensitively distinct");
                }
                _ => panic!("expected mcq"),
            }
        }
    }

    #[test]
    fn mcq_generation_stops_when_keywords_run_out() {
        let tagger = StubTagger::new();
        let mut rng = StdRng::seed_from_u64(3);

        // Five keywords but ten questions requested.
        let mcqs = generate_mcqs(&tagger, "kernel scheduler pages frames disk", 10, &mut rng);
        assert_eq!(mcqs.len(), 5);
    }

    #[test]
    fn mcq_generation_degrades_on_tiny_pool() {
        let tagger = StubTagger::new();
        let mut rng = StdRng::seed_from_u64(3);

        // Two distinct keywords cannot supply three distractors.
        let mcqs = generate_mcqs(&tagger, "kernel scheduler", 5, &mut rng);
        assert!(mcqs.is_empty());
    }

    #[test]
    fn mcq_generation_empty_context() {
        let tagger = StubTagger::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_mcqs(&tagger, "", 5, &mut rng).is_empty());
    }

    #[test]
    fn descriptive_uses_templates_in_keyword_order() {
        let tagger = StubTagger::new();
        let questions = generate_descriptive(&tagger, "kernel scheduler pages", 2);
        assert_eq!(questions.len(), 2);

        match &questions[0] {
            Question::Descriptive { question, answer } => {
                assert_eq!(question, "Explain kernel.");
                assert_eq!(answer, "kernel explanation based on the given context.");
            }
            _ => panic!("expected descriptive"),
        }
        match &questions[1] {
            Question::Descriptive { question, .. } => assert_eq!(question, "Explain scheduler."),
            _ => panic!("expected descriptive"),
        }
    }

    #[test]
    fn descriptive_short_when_keywords_scarce() {
        let tagger = StubTagger::new();
        let questions = generate_descriptive(&tagger, "kernel", 5);
        assert_eq!(questions.len(), 1);
    }
}
