use crate::components::table::capacity::CapacityPolicy;
use crate::components::table::hashing::hash::KeyHash;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maps a probe number to a slot index. Implementations must be pure: the same arguments
/// always give the same index, and the result is always `< capacity`.
///
/// A table picks its strategy once, on construction. Switching strategies on a populated table
/// would make every stored entry unreachable.
pub trait ProbeStrategy {
    /// Slot index of probe number `i` for a key whose sequence starts at `start`. `step` is the
    /// key's secondary step ([`KeyHash::step`]); strategies that don't need it ignore it.
    fn probe(&self, start: usize, step: usize, capacity: usize, i: usize) -> usize;

    /// How capacities have to be chosen for this strategy to reach enough slots.
    fn capacity_policy(&self) -> CapacityPolicy;

    /// Load factor used when the configuration doesn't name one.
    #[inline]
    fn default_load_factor(&self) -> f32 {
        0.5
    }

    /// Rejects configurations for which the probe sequence is not guaranteed to find a free slot.
    /// `initial_capacity` is already adjusted by [`ProbeStrategy::capacity_policy`].
    #[inline]
    fn validate(&self, _initial_capacity: usize, _load_factor: f32) -> Result<()> {
        Ok(())
    }
}

/// `(start + i) mod capacity`. Visits every slot for any capacity.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl ProbeStrategy for Linear {
    #[inline]
    fn probe(&self, start: usize, _step: usize, capacity: usize, i: usize) -> usize {
        ((start % capacity) + (i % capacity)) % capacity
    }

    #[inline]
    fn capacity_policy(&self) -> CapacityPolicy {
        CapacityPolicy::Any
    }
}

/// `(start + c1 * i + c2 * i^2) mod capacity` over prime capacities.
///
/// For an odd prime `p` with `c2 mod p != 0` the sequence visits exactly `(p + 1) / 2` distinct
/// slots, so a free slot is only guaranteed while at most half the table is occupied. The
/// table therefore only accepts coefficients with `1 <= c2`, both coefficients below the
/// initial capacity (capacities only grow, so `c2 mod p` stays non-zero) and a load factor of at
/// most `0.5`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quadratic {
    pub c1: usize,
    pub c2: usize,
}

impl Quadratic {
    /// Highest load factor for which quadratic probing is guaranteed to find a free slot.
    pub const MAX_LOAD: f32 = 0.5;

    #[inline]
    pub fn new(c1: usize, c2: usize) -> Self {
        Self { c1, c2 }
    }
}

impl Default for Quadratic {
    #[inline]
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl ProbeStrategy for Quadratic {
    #[inline]
    fn probe(&self, start: usize, _step: usize, capacity: usize, i: usize) -> usize {
        let max = capacity as u128;
        let i = i as u128 % max;
        let c1 = self.c1 as u128 % max;
        let c2 = self.c2 as u128 % max;
        ((start as u128 % max + c1 * i % max + c2 * (i * i % max) % max) % max) as usize
    }

    #[inline]
    fn capacity_policy(&self) -> CapacityPolicy {
        CapacityPolicy::Prime
    }

    fn validate(&self, initial_capacity: usize, load_factor: f32) -> Result<()> {
        if self.c2 == 0 || self.c1 >= initial_capacity || self.c2 >= initial_capacity {
            return Err(Error::UnsafeCoefficients {
                c1: self.c1,
                c2: self.c2,
            });
        }

        if load_factor > Self::MAX_LOAD {
            return Err(Error::InvalidLoadFactor(load_factor));
        }

        Ok(())
    }
}

/// `(start + i * step) mod capacity` with the step taken from the key's second hash. Prime
/// capacities make every step coprime with the capacity, so every slot is visited.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Double;

impl ProbeStrategy for Double {
    #[inline]
    fn probe(&self, start: usize, step: usize, capacity: usize, i: usize) -> usize {
        let max = capacity as u128;
        ((start as u128 % max + (i as u128 % max) * (step as u128 % max)) % max) as usize
    }

    #[inline]
    fn capacity_policy(&self) -> CapacityPolicy {
        CapacityPolicy::Prime
    }

    #[inline]
    fn default_load_factor(&self) -> f32 {
        0.7
    }
}

/// A strategy chosen at runtime, e.g. from a deserialized [`TableConfig`].
///
/// [`TableConfig`]: crate::components::table::config::TableConfig
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Probe {
    Linear,
    Quadratic { c1: usize, c2: usize },
    Double,
}

impl Default for Probe {
    #[inline]
    fn default() -> Self {
        Probe::Double
    }
}

impl From<Linear> for Probe {
    #[inline]
    fn from(_: Linear) -> Self {
        Probe::Linear
    }
}

impl From<Quadratic> for Probe {
    #[inline]
    fn from(q: Quadratic) -> Self {
        Probe::Quadratic { c1: q.c1, c2: q.c2 }
    }
}

impl From<Double> for Probe {
    #[inline]
    fn from(_: Double) -> Self {
        Probe::Double
    }
}

impl ProbeStrategy for Probe {
    #[inline]
    fn probe(&self, start: usize, step: usize, capacity: usize, i: usize) -> usize {
        match *self {
            Probe::Linear => Linear.probe(start, step, capacity, i),
            Probe::Quadratic { c1, c2 } => Quadratic::new(c1, c2).probe(start, step, capacity, i),
            Probe::Double => Double.probe(start, step, capacity, i),
        }
    }

    #[inline]
    fn capacity_policy(&self) -> CapacityPolicy {
        match *self {
            Probe::Linear => Linear.capacity_policy(),
            Probe::Quadratic { c1, c2 } => Quadratic::new(c1, c2).capacity_policy(),
            Probe::Double => Double.capacity_policy(),
        }
    }

    #[inline]
    fn default_load_factor(&self) -> f32 {
        match *self {
            Probe::Linear => Linear.default_load_factor(),
            Probe::Quadratic { c1, c2 } => Quadratic::new(c1, c2).default_load_factor(),
            Probe::Double => Double.default_load_factor(),
        }
    }

    fn validate(&self, initial_capacity: usize, load_factor: f32) -> Result<()> {
        match *self {
            Probe::Linear => Linear.validate(initial_capacity, load_factor),
            Probe::Quadratic { c1, c2 } => {
                Quadratic::new(c1, c2).validate(initial_capacity, load_factor)
            }
            Probe::Double => Double.validate(initial_capacity, load_factor),
        }
    }
}

/// The probe sequence of one key for one operation: `capacity` slot indices, lazily computed.
pub struct ProbeSeq<'a, P> {
    strategy: &'a P,
    start: usize,
    step: usize,
    capacity: usize,
    i: usize,
}

impl<'a, P> ProbeSeq<'a, P> {
    #[inline]
    pub fn new(strategy: &'a P, hash: &KeyHash, capacity: usize) -> Self {
        Self {
            strategy,
            start: hash.start(capacity),
            step: hash.step(capacity),
            capacity,
            i: 0,
        }
    }
}

impl<'a, P: ProbeStrategy> Iterator for ProbeSeq<'a, P> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.capacity {
            return None;
        }

        let pos = self.strategy.probe(self.start, self.step, self.capacity, self.i);
        self.i += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.capacity - self.i;
        (left, Some(left))
    }
}

impl<'a, P: ProbeStrategy> ExactSizeIterator for ProbeSeq<'a, P> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::components::table::primes::is_prime;
    use std::collections::HashSet;

    fn coverage<P: ProbeStrategy>(p: &P, start: usize, step: usize, capacity: usize) -> usize {
        (0..capacity)
            .map(|i| p.probe(start, step, capacity, i))
            .collect::<HashSet<_>>()
            .len()
    }

    #[test]
    fn test_formulas() {
        assert_eq!(Linear.probe(3, 0, 7, 0), 3);
        assert_eq!(Linear.probe(3, 0, 7, 5), 1);
        // 2 + 3 + 9 = 14
        assert_eq!(Quadratic::new(1, 1).probe(2, 0, 7, 3), 0);
        assert_eq!(Quadratic::new(0, 1).probe(1, 0, 11, 4), 6);
        // 4 + 2 * 3 = 10
        assert_eq!(Double.probe(4, 3, 7, 2), 3);
        assert_eq!(Probe::Double.probe(4, 3, 7, 2), 3);
        assert_eq!(Probe::Linear.probe(6, 3, 7, 1), 0);
    }

    #[test]
    fn test_in_range() {
        let strategies = [
            Probe::Linear,
            Probe::Quadratic { c1: 1, c2: 1 },
            Probe::Quadratic { c1: 65537, c2: 16411 },
            Probe::Double,
        ];
        for p in strategies {
            for i in [0, 1, 2, 1000, usize::MAX] {
                assert!(p.probe(usize::MAX, usize::MAX, 11, i) < 11);
            }
        }
    }

    #[test]
    fn test_linear_covers_everything() {
        for capacity in 3..40 {
            assert_eq!(coverage(&Linear, 5, 0, capacity), capacity);
        }
    }

    #[test]
    fn test_double_covers_primes() {
        for capacity in (3..200).filter(|i| is_prime(*i)) {
            for step in 1..capacity {
                assert_eq!(coverage(&Double, 1, step, capacity), capacity);
            }
        }
    }

    #[test]
    fn test_quadratic_covers_half() {
        for capacity in (3..200usize).filter(|i| is_prime(*i)) {
            for (c1, c2) in [(0, 1), (1, 1), (2, 1), (1, 2)] {
                if c1 >= capacity || c2 >= capacity {
                    continue;
                }
                let q = Quadratic::new(c1, c2);
                assert_eq!(coverage(&q, 0, 0, capacity), (capacity + 1) / 2);
            }
        }
    }

    #[test]
    fn test_quadratic_validation() {
        assert!(Quadratic::new(1, 1).validate(11, 0.5).is_ok());
        assert!(Quadratic::new(0, 3).validate(11, 0.25).is_ok());
        assert_eq!(
            Quadratic::new(1, 0).validate(11, 0.5),
            Err(Error::UnsafeCoefficients { c1: 1, c2: 0 })
        );
        assert_eq!(
            Quadratic::new(65537, 16411).validate(11, 0.5),
            Err(Error::UnsafeCoefficients { c1: 65537, c2: 16411 })
        );
        assert_eq!(
            Quadratic::new(1, 1).validate(11, 0.7),
            Err(Error::InvalidLoadFactor(0.7))
        );
        assert!(Probe::Quadratic { c1: 1, c2: 11 }.validate(11, 0.5).is_err());
        assert!(Probe::Double.validate(3, 1.0).is_ok());
    }

    #[test]
    fn test_seq() {
        let hash = KeyHash::new(10, 4);
        let seq: Vec<_> = ProbeSeq::new(&Double, &hash, 7).collect();
        // start = 10 % 7 = 3, step = 1 + 4 % 6 = 5
        assert_eq!(seq, vec![3, 1, 6, 4, 2, 0, 5]);
        assert_eq!(ProbeSeq::new(&Linear, &hash, 7).len(), 7);
    }
}
