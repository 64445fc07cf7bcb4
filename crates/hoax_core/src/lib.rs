pub mod config;
pub mod detector;
pub mod error;
pub mod explain;
pub mod features;
pub mod generator;
pub mod lexicon;
pub mod scoring;
pub mod template;
pub mod types;

pub use config::Config;
pub use detector::{Detector, DetectorConfig, NewsDetector};
pub use error::{Error, Result};
pub use features::{Feature, FeatureVector};
pub use generator::Generator;
pub use types::{Article, Category, CategoryRequest, DetectionResult};

pub mod prelude {
    pub use super::{
        Article, Category, Config, DetectionResult, Detector, Error, Generator, NewsDetector,
        Result,
    };
}
