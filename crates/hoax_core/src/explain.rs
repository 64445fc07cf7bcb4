use crate::features::{Feature, FeatureVector};

pub const BUZZWORDS: &str = "Contains suspicious buzzwords commonly used in fake news";
pub const EMOTIONAL: &str = "Uses excessive emotional language";
pub const URGENCY: &str = "Creates artificial urgency";
pub const EXAGGERATION: &str = "Uses absolute/exaggerated language";
pub const CAPITALS: &str = "Excessive use of capital letters";
pub const CREDIBLE_SOURCES: &str = "Contains credible source indicators";

pub const STYLE_FAKE: &str = "Overall writing style suggests fake news";
pub const STYLE_CREDIBLE: &str = "Writing style appears credible";
pub const STYLE_MIXED: &str = "Mixed indicators - exercise caution";

/// Checked in order; every rule that fires contributes its message.
const RULES: [(Feature, f64, &str); 6] = [
    (Feature::FakeIndicatorRatio, 0.05, BUZZWORDS),
    (Feature::EmotionalWordRatio, 0.10, EMOTIONAL),
    (Feature::UrgencyWordRatio, 0.05, URGENCY),
    (Feature::ExaggerationWordRatio, 0.10, EXAGGERATION),
    (Feature::AllCapsRatio, 0.10, CAPITALS),
    (Feature::CredibilityIndicatorRatio, 0.05, CREDIBLE_SOURCES),
];

/// Reasons behind a score. Falls back to a single score-tier message when no
/// feature rule fires.
pub fn reasons(features: &FeatureVector, score: f64) -> Vec<&'static str> {
    let fired: Vec<&'static str> = RULES
        .iter()
        .filter(|(feature, threshold, _)| features.get(*feature) > *threshold)
        .map(|(_, _, message)| *message)
        .collect();

    if !fired.is_empty() {
        return fired;
    }

    let tier = if score > 0.7 {
        STYLE_FAKE
    } else if score < 0.3 {
        STYLE_CREDIBLE
    } else {
        STYLE_MIXED
    };
    vec![tier]
}

pub fn explain(features: &FeatureVector, score: f64) -> String {
    reasons(features, score).join("; ")
}
