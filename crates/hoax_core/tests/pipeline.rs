use chrono::NaiveDate;
use hoax_core::prelude::*;
use hoax_core::{explain, scoring, CategoryRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_generated_articles_round_through_detector() {
    let generator = Generator::new().unwrap();
    let detector = Detector::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

    for _ in 0..25 {
        let article = generator
            .generate_on(CategoryRequest::Random, today, &mut rng)
            .unwrap();
        let result = detector.detect(&article.content, &article.title);

        assert!(result.features.word_count > 0.0);
        assert!((0.0..=1.0).contains(&result.confidence_score));
        assert_eq!(result.confidence_score, scoring::score(&result.features));
        assert!(!result.explanation.is_empty());
    }
}

#[test]
fn test_every_named_category() {
    let generator = Generator::new().unwrap();

    for name in CategoryRequest::names() {
        let article = generator.generate_article(name).unwrap();
        if name != "random" {
            assert_eq!(article.category.as_str(), name);
        }
        assert!(!article.title.is_empty());
        assert!(article.is_fake);
    }
}

#[test]
fn test_bogus_category_is_rejected() {
    let generator = Generator::new().unwrap();
    assert!(matches!(
        generator.generate_article("bogus_category"),
        Err(Error::InvalidCategory(name)) if name == "bogus_category"
    ));
}

#[test]
fn test_credible_text() {
    let detector = Detector::default();
    let text = "The university published a peer-reviewed study with data and analysis \
                in a journal report verified by an official government scientist.";
    let result = detector.detect(text, "");

    assert_eq!(result.confidence_score, 0.0);
    assert!(!result.is_fake);
    assert_eq!(result.explanation, explain::CREDIBLE_SOURCES);
}

#[test]
fn test_detection_result_json_shape() {
    let detector = Detector::default();
    let result = detector.detect("You won't believe this!", "SHOCKING");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["is_fake"], false);
    assert_eq!(json["features"].as_object().unwrap().len(), 16);
    assert!(json["explanation"].is_string());

    let back: DetectionResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
