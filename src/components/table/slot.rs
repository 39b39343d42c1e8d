/// State of a single slot in the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot<K, V> {
    /// Never used since the slot array was allocated. Ends every probe walk.
    Empty,
    /// Used to hold an entry that got deleted. Probe walks continue past it; inserts may reuse it.
    Tombstone,
    Occupied(K, V),
}

impl<K, V> Default for Slot<K, V> {
    #[inline]
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K, V> Slot<K, V> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(..))
    }

    #[inline]
    pub fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        }
    }

    #[inline]
    pub fn into_entry(self) -> Option<(K, V)> {
        match self {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        }
    }
}

/// Allocates `capacity` empty slots.
#[inline]
pub(crate) fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Slot::default);
    slots
}
