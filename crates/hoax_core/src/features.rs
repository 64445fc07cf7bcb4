//! Lexical feature extraction.
//!
//! Text is split on whitespace into tokens and on runs of `.`, `!` and `?`
//! into sentences. Every ratio divides by `max(count, 1)`, so empty input
//! yields an all-zero vector.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::{
    CREDIBILITY_INDICATORS, EMOTIONAL_WORDS, EXAGGERATION_WORDS, FAKE_INDICATORS, URGENCY_WORDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    WordCount,
    SentenceCount,
    AvgSentenceLength,
    AvgWordLength,
    AllCapsRatio,
    TitleCaseRatio,
    ExclamationRatio,
    QuestionRatio,
    QuotesRatio,
    FakeIndicatorRatio,
    CredibilityIndicatorRatio,
    EmotionalWordRatio,
    UrgencyWordRatio,
    ExaggerationWordRatio,
    UniqueWordRatio,
    LongWordRatio,
}

impl Feature {
    /// Schema order.
    pub const ALL: [Feature; 16] = [
        Feature::WordCount,
        Feature::SentenceCount,
        Feature::AvgSentenceLength,
        Feature::AvgWordLength,
        Feature::AllCapsRatio,
        Feature::TitleCaseRatio,
        Feature::ExclamationRatio,
        Feature::QuestionRatio,
        Feature::QuotesRatio,
        Feature::FakeIndicatorRatio,
        Feature::CredibilityIndicatorRatio,
        Feature::EmotionalWordRatio,
        Feature::UrgencyWordRatio,
        Feature::ExaggerationWordRatio,
        Feature::UniqueWordRatio,
        Feature::LongWordRatio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::WordCount => "word_count",
            Feature::SentenceCount => "sentence_count",
            Feature::AvgSentenceLength => "avg_sentence_length",
            Feature::AvgWordLength => "avg_word_length",
            Feature::AllCapsRatio => "all_caps_ratio",
            Feature::TitleCaseRatio => "title_case_ratio",
            Feature::ExclamationRatio => "exclamation_ratio",
            Feature::QuestionRatio => "question_ratio",
            Feature::QuotesRatio => "quotes_ratio",
            Feature::FakeIndicatorRatio => "fake_indicator_ratio",
            Feature::CredibilityIndicatorRatio => "credibility_indicator_ratio",
            Feature::EmotionalWordRatio => "emotional_word_ratio",
            Feature::UrgencyWordRatio => "urgency_word_ratio",
            Feature::ExaggerationWordRatio => "exaggeration_word_ratio",
            Feature::UniqueWordRatio => "unique_word_ratio",
            Feature::LongWordRatio => "long_word_ratio",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed 16-entry feature schema. Serializes as a JSON object keyed by
/// feature name, in schema order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub word_count: f64,
    pub sentence_count: f64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub all_caps_ratio: f64,
    pub title_case_ratio: f64,
    pub exclamation_ratio: f64,
    pub question_ratio: f64,
    pub quotes_ratio: f64,
    pub fake_indicator_ratio: f64,
    pub credibility_indicator_ratio: f64,
    pub emotional_word_ratio: f64,
    pub urgency_word_ratio: f64,
    pub exaggeration_word_ratio: f64,
    pub unique_word_ratio: f64,
    pub long_word_ratio: f64,
}

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> f64 {
        *self.slot(feature)
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        *self.slot_mut(feature) = value;
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Feature::ALL.into_iter().map(|f| (f.name(), self.get(f)))
    }

    fn slot(&self, feature: Feature) -> &f64 {
        match feature {
            Feature::WordCount => &self.word_count,
            Feature::SentenceCount => &self.sentence_count,
            Feature::AvgSentenceLength => &self.avg_sentence_length,
            Feature::AvgWordLength => &self.avg_word_length,
            Feature::AllCapsRatio => &self.all_caps_ratio,
            Feature::TitleCaseRatio => &self.title_case_ratio,
            Feature::ExclamationRatio => &self.exclamation_ratio,
            Feature::QuestionRatio => &self.question_ratio,
            Feature::QuotesRatio => &self.quotes_ratio,
            Feature::FakeIndicatorRatio => &self.fake_indicator_ratio,
            Feature::CredibilityIndicatorRatio => &self.credibility_indicator_ratio,
            Feature::EmotionalWordRatio => &self.emotional_word_ratio,
            Feature::UrgencyWordRatio => &self.urgency_word_ratio,
            Feature::ExaggerationWordRatio => &self.exaggeration_word_ratio,
            Feature::UniqueWordRatio => &self.unique_word_ratio,
            Feature::LongWordRatio => &self.long_word_ratio,
        }
    }

    fn slot_mut(&mut self, feature: Feature) -> &mut f64 {
        match feature {
            Feature::WordCount => &mut self.word_count,
            Feature::SentenceCount => &mut self.sentence_count,
            Feature::AvgSentenceLength => &mut self.avg_sentence_length,
            Feature::AvgWordLength => &mut self.avg_word_length,
            Feature::AllCapsRatio => &mut self.all_caps_ratio,
            Feature::TitleCaseRatio => &mut self.title_case_ratio,
            Feature::ExclamationRatio => &mut self.exclamation_ratio,
            Feature::QuestionRatio => &mut self.question_ratio,
            Feature::QuotesRatio => &mut self.quotes_ratio,
            Feature::FakeIndicatorRatio => &mut self.fake_indicator_ratio,
            Feature::CredibilityIndicatorRatio => &mut self.credibility_indicator_ratio,
            Feature::EmotionalWordRatio => &mut self.emotional_word_ratio,
            Feature::UrgencyWordRatio => &mut self.urgency_word_ratio,
            Feature::ExaggerationWordRatio => &mut self.exaggeration_word_ratio,
            Feature::UniqueWordRatio => &mut self.unique_word_ratio,
            Feature::LongWordRatio => &mut self.long_word_ratio,
        }
    }
}

pub fn extract(text: &str) -> FeatureVector {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let word_count = words.len();
    let denom = word_count.max(1) as f64;
    let per_word = |c: char| text.matches(c).count() as f64 / denom;

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let unique: HashSet<&str> = words.iter().copied().collect();

    FeatureVector {
        word_count: word_count as f64,
        sentence_count: sentence_count as f64,
        avg_sentence_length: word_count as f64 / sentence_count.max(1) as f64,
        avg_word_length: total_chars as f64 / denom,
        all_caps_ratio: share(&words, |w| is_upper(w) && w.chars().count() > 1),
        title_case_ratio: share(&words, is_title),
        exclamation_ratio: per_word('!'),
        question_ratio: per_word('?'),
        quotes_ratio: per_word('"'),
        fake_indicator_ratio: share(&words, |w| {
            FAKE_INDICATORS.contains(w.to_uppercase().as_str())
        }),
        credibility_indicator_ratio: share(&words, |w| {
            CREDIBILITY_INDICATORS.contains(w.to_lowercase().as_str())
        }),
        emotional_word_ratio: share(&words, |w| {
            EMOTIONAL_WORDS.contains(w.to_lowercase().as_str())
        }),
        urgency_word_ratio: share(&words, |w| URGENCY_WORDS.contains(w.to_lowercase().as_str())),
        exaggeration_word_ratio: share(&words, |w| {
            EXAGGERATION_WORDS.contains(w.to_lowercase().as_str())
        }),
        unique_word_ratio: unique.len() as f64 / denom,
        long_word_ratio: share(&words, |w| w.chars().count() > 6),
    }
}

/// Fraction of `words` matching `pred`, zero for no words.
fn share<F: Fn(&str) -> bool>(words: &[&str], pred: F) -> f64 {
    let hits = words.iter().filter(|&&w| pred(w)).count();
    hits as f64 / words.len().max(1) as f64
}

/// At least one cased character and no lowercase ones.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// Uppercase only after uncased characters, lowercase only after cased ones,
/// and at least one cased character. "Dr." and "U.S." qualify, "McDonald"
/// does not.
fn is_title(word: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;

    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }

    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_text() {
        let features = extract("");
        assert_eq!(features, FeatureVector::default());
        assert!(features.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_whitespace_only() {
        let features = extract("   \n\t ");
        assert_eq!(features.word_count, 0.0);
        assert_eq!(features.sentence_count, 0.0);
    }

    #[test]
    fn test_counts() {
        let features = extract("Hello world. This is a test! Is it? ...");
        assert_eq!(features.word_count, 9.0);
        assert_eq!(features.sentence_count, 3.0);
        assert!(approx(features.avg_sentence_length, 3.0));
        assert!(approx(features.exclamation_ratio, 1.0 / 9.0));
        assert!(approx(features.question_ratio, 1.0 / 9.0));
    }

    #[test]
    fn test_repeated_buzzword() {
        let text = vec!["BREAKING"; 10].join(" ");
        let features = extract(&text);

        assert_eq!(features.word_count, 10.0);
        assert_eq!(features.sentence_count, 1.0);
        assert_eq!(features.fake_indicator_ratio, 1.0);
        assert_eq!(features.all_caps_ratio, 1.0);
        assert_eq!(features.urgency_word_ratio, 1.0);
        assert_eq!(features.long_word_ratio, 1.0);
        assert!(approx(features.unique_word_ratio, 0.1));
        assert_eq!(features.title_case_ratio, 0.0);
    }

    #[test]
    fn test_exact_token_matching() {
        // Attached punctuation prevents a lexicon hit.
        let features = extract("BREAKING: shocking, study");
        assert!(approx(features.fake_indicator_ratio, 0.0));
        assert!(approx(features.emotional_word_ratio, 0.0));
        assert!(approx(features.credibility_indicator_ratio, 1.0 / 3.0));
    }

    #[test]
    fn test_case_folding() {
        let features = extract("secret Secret SECRET Study STUDY");
        assert!(approx(features.fake_indicator_ratio, 3.0 / 5.0));
        assert!(approx(features.credibility_indicator_ratio, 2.0 / 5.0));
    }

    #[test]
    fn test_quotes_and_word_length() {
        let features = extract("\"quoted\" words");
        assert!(approx(features.quotes_ratio, 1.0));
        assert!(approx(features.avg_word_length, 6.5));
    }

    #[test]
    fn test_caps_and_title_case() {
        assert!(is_upper("NASA"));
        assert!(is_upper("A"));
        assert!(is_upper("COVER-UP"));
        assert!(!is_upper("NaSA"));
        assert!(!is_upper("123"));

        assert!(is_title("Hello"));
        assert!(is_title("Dr."));
        assert!(is_title("U.S."));
        assert!(is_title("Hello-World"));
        assert!(!is_title("McDonald"));
        assert!(!is_title("hello"));
        assert!(!is_title("HELLO"));
        assert!(!is_title("42"));

        // Single-letter capitals are title case but too short to count as caps.
        let features = extract("A Big DEAL");
        assert!(approx(features.all_caps_ratio, 1.0 / 3.0));
        assert!(approx(features.title_case_ratio, 2.0 / 3.0));
    }

    #[test]
    fn test_ratios_are_bounded() {
        let text = "Scientists CONFIRMED the study today! Everyone agrees, absolutely. \
                    A shocking, incredible revelation? Nobody knows.";
        let features = extract(text);
        for feature in [
            Feature::AllCapsRatio,
            Feature::TitleCaseRatio,
            Feature::FakeIndicatorRatio,
            Feature::CredibilityIndicatorRatio,
            Feature::EmotionalWordRatio,
            Feature::UrgencyWordRatio,
            Feature::ExaggerationWordRatio,
            Feature::UniqueWordRatio,
            Feature::LongWordRatio,
        ] {
            let value = features.get(feature);
            assert!((0.0..=1.0).contains(&value), "{} = {}", feature, value);
        }
    }

    #[test]
    fn test_get_set_and_schema_order() {
        let mut features = FeatureVector::default();
        features.set(Feature::UrgencyWordRatio, 0.5);
        assert_eq!(features.get(Feature::UrgencyWordRatio), 0.5);
        assert_eq!(features.urgency_word_ratio, 0.5);

        let names: Vec<_> = features.iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), 16);
        assert_eq!(names[0], "word_count");
        assert_eq!(names[15], "long_word_ratio");
    }

    #[test]
    fn test_serializes_as_named_map() {
        let features = extract("BREAKING news");
        let json = serde_json::to_value(features).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 16);
        for feature in Feature::ALL {
            assert!(object.contains_key(feature.name()), "missing {}", feature);
        }
        assert_eq!(object["fake_indicator_ratio"], 0.5);
    }
}
