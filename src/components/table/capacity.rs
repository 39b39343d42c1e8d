use crate::components::table::primes;

/// Smallest capacity any table is created with.
pub const MIN_CAPACITY: usize = 3;

/// Decides how large the slot array is on creation and on growth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Any capacity works, used where the probe sequence covers every slot regardless.
    Any,
    /// Capacities are always prime.
    Prime,
}

impl CapacityPolicy {
    pub fn initial_capacity(&self, requested: usize) -> usize {
        let requested = requested.max(MIN_CAPACITY);
        match self {
            CapacityPolicy::Any => requested,
            CapacityPolicy::Prime => Self::prime_at_least(requested),
        }
    }

    /// Capacity the table grows to from `current`: `2 * current + 1`, bumped to the next prime
    /// for [`CapacityPolicy::Prime`].
    pub fn next_capacity(&self, current: usize) -> usize {
        let grown = current
            .max(MIN_CAPACITY)
            .checked_mul(2)
            .and_then(|i| i.checked_add(1))
            .expect("capacity overflow");
        match self {
            CapacityPolicy::Any => grown,
            CapacityPolicy::Prime => Self::prime_at_least(grown),
        }
    }

    /// First capacity in the growth chain starting at `current` that keeps `len` entries at or
    /// below `load_factor`. Returns `current` if it already does.
    pub fn capacity_for(&self, current: usize, len: usize, load_factor: f32) -> usize {
        let mut capacity = current;
        while exceeds(len, capacity, load_factor) {
            capacity = self.next_capacity(capacity);
        }
        capacity
    }

    #[inline]
    fn prime_at_least(n: usize) -> usize {
        primes::next_prime(n).expect("capacity overflow")
    }
}

/// Returns `true` if `len` entries in `capacity` slots exceed `load_factor`.
#[inline]
pub(crate) fn exceeds(len: usize, capacity: usize, load_factor: f32) -> bool {
    capacity == 0 || len as f32 / capacity as f32 > load_factor
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(CapacityPolicy::Any.initial_capacity(0), 3);
        assert_eq!(CapacityPolicy::Any.initial_capacity(8), 8);
        assert_eq!(CapacityPolicy::Prime.initial_capacity(0), 3);
        assert_eq!(CapacityPolicy::Prime.initial_capacity(7), 7);
        assert_eq!(CapacityPolicy::Prime.initial_capacity(8), 11);
        assert_eq!(CapacityPolicy::Prime.initial_capacity(11), 11);
    }

    #[test]
    fn test_grow() {
        assert_eq!(CapacityPolicy::Any.next_capacity(11), 23);
        assert_eq!(CapacityPolicy::Any.next_capacity(8), 17);
        assert_eq!(CapacityPolicy::Prime.next_capacity(7), 17);
        assert_eq!(CapacityPolicy::Prime.next_capacity(17), 37);
        assert_eq!(CapacityPolicy::Prime.next_capacity(37), 79);

        let mut capacity = CapacityPolicy::Prime.initial_capacity(3);
        for _ in 0..10 {
            capacity = CapacityPolicy::Prime.next_capacity(capacity);
            assert!(primes::is_prime(capacity));
        }
    }

    #[test]
    fn test_capacity_for() {
        assert_eq!(CapacityPolicy::Prime.capacity_for(7, 3, 0.5), 7);
        assert_eq!(CapacityPolicy::Prime.capacity_for(7, 4, 0.5), 17);
        assert_eq!(CapacityPolicy::Prime.capacity_for(7, 9, 0.5), 37);
        assert_eq!(CapacityPolicy::Any.capacity_for(3, 3, 1.0), 3);
        assert_eq!(CapacityPolicy::Any.capacity_for(3, 4, 1.0), 7);
    }
}
