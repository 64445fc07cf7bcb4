use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::Error;

/// Confidence attached to every generated article.
pub const GENERATED_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Conspiracy,
    Sensational,
    Clickbait,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Conspiracy,
        Category::Sensational,
        Category::Clickbait,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Conspiracy => "conspiracy",
            Category::Sensational => "sensational",
            Category::Clickbait => "clickbait",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// What a caller asked for: a specific category or a uniform draw over all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRequest {
    Random,
    Specific(Category),
}

impl CategoryRequest {
    pub const RANDOM: &'static str = "random";

    /// Every category name a caller may pass, `random` last.
    pub fn names() -> Vec<&'static str> {
        Category::ALL
            .iter()
            .map(Category::as_str)
            .chain(std::iter::once(Self::RANDOM))
            .collect()
    }
}

impl Default for CategoryRequest {
    fn default() -> Self {
        Self::Random
    }
}

impl FromStr for CategoryRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::RANDOM {
            return Ok(Self::Random);
        }
        s.parse().map(Self::Specific)
    }
}

impl From<Category> for CategoryRequest {
    fn from(category: Category) -> Self {
        Self::Specific(category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub author: String,
    pub source: String,
    pub publish_date: NaiveDate,
    pub category: Category,
    pub is_fake: bool,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub is_fake: bool,
    pub confidence_score: f64,
    pub features: FeatureVector,
    pub explanation: String,
}
