use crate::components::table::hashing::key::CanonicalKey;

const DJB2_INIT: u32 = 5381;

/// The two independent hashes of a key. Both are raw 32 bit values; they only become slot
/// indices when reduced against a capacity, so they stay valid across a resize.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyHash {
    primary: u32,
    secondary: u32,
}

impl KeyHash {
    #[inline]
    pub fn new(primary: u32, secondary: u32) -> Self {
        Self { primary, secondary }
    }

    /// Hashes the canonical form of `key`.
    #[inline]
    pub fn of<K: CanonicalKey + ?Sized>(key: &K) -> Self {
        let bytes = key.canonical();
        Self::new(djb2(&bytes), sdbm(&bytes))
    }

    #[inline]
    pub fn primary(&self) -> u32 {
        self.primary
    }

    #[inline]
    pub fn secondary(&self) -> u32 {
        self.secondary
    }

    /// Index in `[0, capacity)` a probe sequence starts at.
    #[inline]
    pub fn start(&self, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        self.primary as usize % capacity
    }

    /// Step in `[1, capacity)` used by double hashing. Coprime with `capacity` if it is prime.
    #[inline]
    pub fn step(&self, capacity: usize) -> usize {
        if capacity < 2 {
            return 1;
        }
        1 + self.secondary as usize % (capacity - 1)
    }
}

/// djb2: `h = h * 33 + b`.
#[inline]
pub fn djb2(b: &[u8]) -> u32 {
    b.iter().fold(DJB2_INIT, |h, &e| {
        (h << 5).wrapping_add(h).wrapping_add(e as u32)
    })
}

/// sdbm: `h = b + (h << 6) + (h << 16) - h`.
#[inline]
pub fn sdbm(b: &[u8]) -> u32 {
    b.iter().fold(0u32, |h, &e| {
        (e as u32)
            .wrapping_add(h << 6)
            .wrapping_add(h << 16)
            .wrapping_sub(h)
    })
}
