use crate::features::{Feature, FeatureVector};

/// Linear weights over the lexical features. Anything not listed here does not
/// contribute to the score.
pub const WEIGHTS: [(Feature, f64); 7] = [
    (Feature::FakeIndicatorRatio, 0.25),
    (Feature::CredibilityIndicatorRatio, -0.20),
    (Feature::EmotionalWordRatio, 0.15),
    (Feature::UrgencyWordRatio, 0.10),
    (Feature::ExaggerationWordRatio, 0.15),
    (Feature::AllCapsRatio, 0.10),
    (Feature::ExclamationRatio, 0.05),
];

/// Weighted sum before clipping. May be negative.
pub fn raw_score(features: &FeatureVector) -> f64 {
    WEIGHTS
        .iter()
        .map(|&(feature, weight)| features.get(feature) * weight)
        .sum()
}

/// Fake-news likelihood in `[0, 1]`.
pub fn score(features: &FeatureVector) -> f64 {
    raw_score(features).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(pairs: &[(Feature, f64)]) -> FeatureVector {
        let mut features = FeatureVector::default();
        for &(feature, value) in pairs {
            features.set(feature, value);
        }
        features
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        assert_eq!(score(&FeatureVector::default()), 0.0);
    }

    #[test]
    fn test_single_weight() {
        let features = with(&[(Feature::FakeIndicatorRatio, 1.0)]);
        assert!((score(&features) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_unweighted_features_ignored() {
        let features = with(&[
            (Feature::WordCount, 500.0),
            (Feature::TitleCaseRatio, 1.0),
            (Feature::UniqueWordRatio, 1.0),
            (Feature::QuotesRatio, 1.0),
        ]);
        assert_eq!(score(&features), 0.0);
    }

    #[test]
    fn test_clipped_below_zero() {
        let features = with(&[(Feature::CredibilityIndicatorRatio, 1.0)]);
        assert!(raw_score(&features) < 0.0);
        assert_eq!(score(&features), 0.0);
    }

    #[test]
    fn test_clipped_above_one() {
        let features = with(&[(Feature::ExclamationRatio, 40.0)]);
        assert!(raw_score(&features) > 1.0);
        assert_eq!(score(&features), 1.0);
    }

    #[test]
    fn test_monotonic_in_fake_and_credibility() {
        let base = [
            (Feature::EmotionalWordRatio, 0.2),
            (Feature::CredibilityIndicatorRatio, 0.3),
            (Feature::FakeIndicatorRatio, 0.0),
        ];

        let mut previous = f64::MIN;
        for step in 0..=10 {
            let mut features = with(&base);
            features.set(Feature::FakeIndicatorRatio, step as f64 / 10.0);
            let s = score(&features);
            assert!(s >= previous);
            previous = s;
        }

        let mut previous = f64::MAX;
        for step in 0..=10 {
            let mut features = with(&base);
            features.set(Feature::CredibilityIndicatorRatio, step as f64 / 10.0);
            let s = score(&features);
            assert!(s <= previous);
            previous = s;
        }
    }

    #[test]
    fn test_bounded_for_non_negative_inputs() {
        for a in [0.0, 0.3, 1.0, 5.0] {
            for b in [0.0, 0.7, 1.0, 3.0] {
                let mut features = FeatureVector::default();
                for (i, feature) in Feature::ALL.into_iter().enumerate() {
                    features.set(feature, if i % 2 == 0 { a } else { b });
                }
                let s = score(&features);
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}
