use tracing::info;

use crate::explain::explain;
use crate::features::extract;
use crate::scoring::score;
use crate::types::DetectionResult;

pub const DEFAULT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Scores strictly above this are flagged as fake.
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

pub trait NewsDetector: Send + Sync {
    fn name(&self) -> &str;

    /// Scores `text`, with an optional `title` analysed in front of it.
    fn detect(&self, text: &str, title: &str) -> DetectionResult;
}

/// Lexical detector: feature extraction, linear scoring, rule-based
/// explanation. Holds nothing but its threshold.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn is_fake(&self, score: f64) -> bool {
        score > self.config.threshold
    }
}

impl NewsDetector for Detector {
    fn name(&self) -> &str {
        "Lexical"
    }

    fn detect(&self, text: &str, title: &str) -> DetectionResult {
        let full_text = format!("{} {}", title, text);
        let features = extract(full_text.trim());
        let confidence_score = score(&features);
        let is_fake = self.is_fake(confidence_score);
        let explanation = explain(&features, confidence_score);

        info!(
            "🔍 Detection completed - Score: {:.3}, Fake: {}",
            confidence_score, is_fake
        );

        DetectionResult {
            is_fake,
            confidence_score,
            features,
            explanation,
        }
    }
}
