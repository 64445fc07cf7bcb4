use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::detector::DetectorConfig;

/// Runtime knobs shared by the CLI and the web server.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Fixed seed for reproducible generation. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub detector: DetectorConfig,
}

impl Config {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.detector.threshold = threshold;
        self
    }

    /// A fresh random source for one generation call.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.detector.threshold, 0.6);
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = Config::default().with_seed(Some(12)).with_threshold(0.5);
        assert_eq!(config.detector.threshold, 0.5);

        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
