use crate::components::table::slot::Slot;
use std::fmt::{self, Debug, Display};

/// Slot-by-slot dump of a table, one line per slot:
///
/// ```text
/// capacity: 7 size: 1
/// [0] -> empty
/// [1] -> tombstone
/// [2] -> "a" : 1
/// ...
/// ```
pub struct Layout<'a, K, V> {
    slots: &'a [Slot<K, V>],
    len: usize,
}

impl<'a, K, V> Layout<'a, K, V> {
    #[inline]
    pub(super) fn new(slots: &'a [Slot<K, V>], len: usize) -> Self {
        Self { slots, len }
    }
}

impl<'a, K, V> Display for Layout<'a, K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "capacity: {} size: {}", self.slots.len(), self.len)?;
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "[{i}] -> empty")?,
                Slot::Tombstone => writeln!(f, "[{i}] -> tombstone")?,
                Slot::Occupied(k, v) => writeln!(f, "[{i}] -> {k:?} : {v:?}")?,
            }
        }
        Ok(())
    }
}
