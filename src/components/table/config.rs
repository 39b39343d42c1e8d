use crate::components::table::hashing::probe::{Probe, ProbeStrategy};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Capacity a table starts with if nothing else is requested.
pub const DEFAULT_CAPACITY: usize = 11;

/// Construction parameters of a [`SlotTable`].
///
/// [`SlotTable`]: crate::components::table::SlotTable
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct TableConfig<P = Probe> {
    /// Requested number of slots. Raised to at least 3, and to the next prime for strategies that
    /// need prime capacities.
    pub initial_capacity: usize,

    /// Growth threshold in `(0, 1]`. `None` picks the strategy's default.
    pub load_factor: Option<f32>,

    pub probe: P,
}

impl<P> TableConfig<P> {
    #[inline]
    pub fn new(probe: P) -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: None,
            probe,
        }
    }

    #[inline]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    #[inline]
    pub fn with_load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = Some(load_factor);
        self
    }
}

impl<P: ProbeStrategy> TableConfig<P> {
    /// Capacity after applying the strategy's capacity policy.
    #[inline]
    pub fn effective_capacity(&self) -> usize {
        self.probe.capacity_policy().initial_capacity(self.initial_capacity)
    }

    #[inline]
    pub fn effective_load_factor(&self) -> f32 {
        self.load_factor
            .unwrap_or_else(|| self.probe.default_load_factor())
    }

    /// Checks the load factor range and lets the strategy reject unsafe combinations.
    pub fn validate(&self) -> Result<()> {
        let load_factor = self.effective_load_factor();
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(Error::InvalidLoadFactor(load_factor));
        }

        self.probe.validate(self.effective_capacity(), load_factor)
    }
}

impl<P: Default> Default for TableConfig<P> {
    #[inline]
    fn default() -> Self {
        Self::new(P::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::components::table::hashing::probe::{Double, Linear, Quadratic};

    #[test]
    fn test_defaults() {
        let config: TableConfig = TableConfig::default();
        assert_eq!(config.probe, Probe::Double);
        assert_eq!(config.effective_capacity(), 11);
        assert_eq!(config.effective_load_factor(), 0.7);
        assert!(config.validate().is_ok());

        let config = TableConfig::new(Linear).with_capacity(8);
        assert_eq!(config.effective_capacity(), 8);
        assert_eq!(config.effective_load_factor(), 0.5);

        let config = TableConfig::new(Double).with_capacity(8);
        assert_eq!(config.effective_capacity(), 11);
    }

    #[test]
    fn test_validate() {
        for lf in [0.0, -0.5, 1.01, f32::NAN] {
            let config = TableConfig::new(Linear).with_load_factor(lf);
            assert!(matches!(config.validate(), Err(Error::InvalidLoadFactor(_))));
        }
        assert!(TableConfig::new(Linear).with_load_factor(1.0).validate().is_ok());
        assert!(TableConfig::new(Quadratic::default()).validate().is_ok());
        assert!(TableConfig::new(Quadratic::new(1, 5))
            .with_capacity(3)
            .validate()
            .is_err());
        assert!(TableConfig::new(Quadratic::new(1, 5))
            .with_capacity(7)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_bincode() {
        let config = TableConfig::new(Probe::Quadratic { c1: 1, c2: 3 })
            .with_capacity(31)
            .with_load_factor(0.4);
        let raw = bincode::serialize(&config).unwrap();
        let loaded: TableConfig = bincode::deserialize(&raw).unwrap();
        assert_eq!(loaded, config);
    }
}
