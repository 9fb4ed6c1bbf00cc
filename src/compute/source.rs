//! Random array generation.

use rand::prelude::*;

use crate::schema::{ConfigError, ValueRange, VisualizerConfig};

/// Generator for fresh unsorted arrays.
///
/// Values are drawn independently and uniformly from `range`. The only
/// state carried between calls is the generator itself. The range is
/// validated whenever it is replaced, so generation cannot fail.
pub struct ArraySource {
    rng: StdRng,
    range: ValueRange,
}

impl ArraySource {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range: ValueRange::default(),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            range: ValueRange::default(),
        }
    }

    /// Create from a config, honoring its seed and value range.
    pub fn from_config(config: &VisualizerConfig) -> Result<Self, ConfigError> {
        let source = match config.random_seed {
            Some(seed) => Self::new(seed),
            None => Self::random(),
        };
        source.with_range(config.values)
    }

    /// Replace the value range. Empty or non-positive ranges are rejected.
    pub fn with_range(mut self, range: ValueRange) -> Result<Self, ConfigError> {
        range.validate()?;
        self.range = range;
        Ok(self)
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Generate `len` random values.
    pub fn generate(&mut self, len: usize) -> Vec<u32> {
        let ValueRange { min, max } = self.range;
        (0..len).map(|_| self.rng.gen_range(min..=max)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_range() {
        let mut source = ArraySource::new(7);
        for len in [1, 10, 100] {
            let values = source.generate(len);
            assert_eq!(values.len(), len);
            assert!(values.iter().all(|&v| (10..=409).contains(&v)));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = ArraySource::new(42).generate(50);
        let b = ArraySource::new(42).generate(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_calls_differ() {
        let mut source = ArraySource::new(1);
        let a = source.generate(50);
        let b = source.generate(50);
        assert_ne!(a, b);
    }

    #[test]
    fn test_custom_range() {
        let range = ValueRange { min: 3, max: 3 };
        let mut source = ArraySource::new(0).with_range(range).unwrap();
        assert_eq!(source.generate(4), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = VisualizerConfig {
            random_seed: Some(9),
            values: ValueRange { min: 1, max: 1000 },
            ..Default::default()
        };
        let a = ArraySource::from_config(&config).unwrap().generate(20);
        let b = ArraySource::from_config(&config).unwrap().generate(20);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| config.values.contains(*v)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let range = ValueRange { min: 5, max: 1 };
        assert!(matches!(
            ArraySource::new(0).with_range(range),
            Err(ConfigError::InvalidValueRange { min: 5, max: 1 })
        ));
    }

    #[test]
    fn test_zero_range_rejected() {
        let range = ValueRange { min: 0, max: 0 };
        assert!(matches!(
            ArraySource::new(0).with_range(range),
            Err(ConfigError::InvalidValueRange { min: 0, max: 0 })
        ));

        let config = VisualizerConfig {
            values: ValueRange { min: 0, max: 10 },
            ..Default::default()
        };
        assert!(ArraySource::from_config(&config).is_err());
    }

    #[test]
    fn test_rejected_range_keeps_generating_positive() {
        let source = ArraySource::new(5);
        assert!(source.with_range(ValueRange { min: 9, max: 2 }).is_err());

        let mut source = ArraySource::new(5);
        assert!(source.generate(30).iter().all(|&v| v > 0));
    }

    #[test]
    fn test_empty_request() {
        assert!(ArraySource::new(0).generate(0).is_empty());
    }
}
