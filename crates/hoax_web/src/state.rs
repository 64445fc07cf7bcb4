use std::sync::Arc;

use hoax_core::{Config, Detector, Generator, NewsDetector, Result};
use rand::rngs::StdRng;

pub struct AppState {
    pub generator: Arc<Generator>,
    pub detector: Arc<dyn NewsDetector>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            generator: Arc::new(Generator::new()?),
            detector: Arc::new(Detector::new(config.detector)),
            config,
        })
    }

    /// Random source for a single request.
    pub fn rng(&self) -> StdRng {
        self.config.rng()
    }
}
