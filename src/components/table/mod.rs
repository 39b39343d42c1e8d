pub mod capacity;
pub mod config;
pub mod hashing;
pub mod insertion;
pub mod iter;
pub mod layout;
mod primes;
pub mod slot;

use crate::components::table::capacity::{exceeds, CapacityPolicy};
use crate::components::table::config::TableConfig;
use crate::components::table::hashing::hash::KeyHash;
use crate::components::table::hashing::key::CanonicalKey;
use crate::components::table::hashing::probe::{Double, Linear, Probe, ProbeSeq, ProbeStrategy, Quadratic};
use crate::components::table::insertion::Insertion;
use crate::components::table::iter::{Entries, IntoIter, Keys, Values};
use crate::components::table::layout::Layout;
use crate::components::table::slot::{empty_slots, Slot};
use crate::traits::creatable::Creatable;
use crate::Result;
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::mem;

pub type LinearTable<K, V> = SlotTable<K, V, Linear>;
pub type QuadraticTable<K, V> = SlotTable<K, V, Quadratic>;
pub type DoubleTable<K, V> = SlotTable<K, V, Double>;

/// A hash table using open addressing. Every entry lives directly in the slot array; collisions
/// are resolved by walking the probe sequence of the strategy `P`.
///
/// Deleted entries leave a tombstone behind which keeps later entries of the same probe sequence
/// reachable. Tombstones are reused by inserts and dropped when the table grows. Many
/// delete/insert cycles without growth can leave a lot of them around, which makes misses walk
/// further; [`SlotTable::tombstones`] reports how many there are.
///
/// The table is grown before an insert would push `len / capacity` over the load factor, so after
/// every `set` the load factor holds.
#[derive(Clone)]
pub struct SlotTable<K, V, P = Probe> {
    slots: Vec<Slot<K, V>>,

    /// The amount of occupied slots.
    len: usize,

    /// The amount of tombstoned slots.
    tombstones: usize,

    /// Capacity to go back to on `clear`.
    initial_capacity: usize,

    load_factor: f32,

    probe: P,
}

impl<K, V, P> SlotTable<K, V, P>
where
    P: ProbeStrategy,
{
    /// Creates a new table from `config`, rejecting load factors outside `(0, 1]` and probe
    /// configurations that can't guarantee finding a free slot.
    pub fn with_config(config: TableConfig<P>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig<P>) -> Self {
        let initial_capacity = config.effective_capacity();
        let load_factor = config.effective_load_factor();

        Self {
            slots: empty_slots(initial_capacity),
            len: 0,
            tombstones: 0,
            initial_capacity,
            load_factor,
            probe: config.probe,
        }
    }

    #[inline]
    fn policy(&self) -> CapacityPolicy {
        self.probe.capacity_policy()
    }
}

impl<K, V, P> SlotTable<K, V, P>
where
    P: ProbeStrategy + Default,
{
    /// Creates an empty table with the default capacity and the strategy's default load factor.
    pub fn new() -> Self {
        let config = TableConfig::default();
        debug_assert!(config.validate().is_ok());
        Self::build(config)
    }
}

impl<K, V, P> Default for SlotTable<K, V, P>
where
    P: ProbeStrategy + Default,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P> Creatable for SlotTable<K, V, P>
where
    P: ProbeStrategy + Default,
{
    #[inline]
    fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::default().with_capacity(capacity))
    }
}

impl<K, V, P> SlotTable<K, V, P>
where
    K: CanonicalKey + Eq,
    P: ProbeStrategy,
{
    /// Inserts `value` under `key`, returning the value previously stored under it.
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.set_debug(key, value).into_replaced()
    }

    /// Like [`SlotTable::set`] but reports where the entry went and how much probing it took.
    pub fn set_debug(&mut self, key: K, value: V) -> Insertion<V> {
        let resized = self.reserve(1);

        let (key, value) = match self.place(key, value) {
            Ok(insertion) => return insertion.with_resized(resized),
            Err(entry) => entry,
        };

        // The probe sequence holds only other keys and tombstones.
        self.resize();
        match self.place(key, value) {
            Ok(insertion) => insertion.with_resized(true),
            Err(_) => unreachable!("probe sequence found no free slot after growing"),
        }
    }

    /// Grows the table so that `additional` more entries fit without exceeding the load factor.
    /// Returns `true` if the table had to grow.
    pub fn reserve(&mut self, additional: usize) -> bool {
        let needed = self
            .len
            .checked_add(additional)
            .expect("capacity overflow");
        if !exceeds(needed, self.capacity(), self.load_factor) {
            return false;
        }

        let capacity = self
            .policy()
            .capacity_for(self.capacity(), needed, self.load_factor);
        self.rehash_into(capacity);
        true
    }

    /// Grows the table to the next capacity of its capacity policy, rehashing every entry and
    /// dropping all tombstones.
    #[inline]
    pub fn resize(&mut self) {
        let capacity = self.policy().next_capacity(self.capacity());
        self.rehash_into(capacity);
    }

    /// Replaces the slot array with `capacity` empty slots and inserts all live entries of the old
    /// array again.
    fn rehash_into(&mut self, capacity: usize) {
        let old = mem::replace(&mut self.slots, empty_slots(capacity));
        self.len = 0;
        self.tombstones = 0;

        for (k, v) in old.into_iter().filter_map(Slot::into_entry) {
            if self.place(k, v).is_err() {
                unreachable!("no free slot while rehashing into a larger table");
            }
        }
    }

    /// Puts the entry into the table assuming the load factor has already been checked. Gives the
    /// entry back if the key's probe sequence reaches no empty slot.
    fn place(&mut self, key: K, value: V) -> std::result::Result<Insertion<V>, (K, V)> {
        let hash = KeyHash::of(&key);
        let capacity = self.slots.len();

        let mut first_tombstone = None;
        let mut free = None;

        for (i, pos) in ProbeSeq::new(&self.probe, &hash, capacity).enumerate() {
            match &mut self.slots[pos] {
                Slot::Empty => {
                    free = Some(first_tombstone.unwrap_or((pos, i)));
                    break;
                }
                Slot::Tombstone => {
                    first_tombstone.get_or_insert((pos, i));
                }
                Slot::Occupied(k, v) if *k == key => {
                    let old = mem::replace(v, value);
                    return Ok(Insertion::updated(pos, i, old));
                }
                Slot::Occupied(..) => {}
            }
        }

        // No empty slot in the whole sequence. The caller grows the table, which also clears the
        // tombstones that would otherwise keep every walk at full length.
        let (pos, collisions) = match free {
            Some(target) => target,
            None => return Err((key, value)),
        };

        if self.slots[pos].is_tombstone() {
            self.tombstones -= 1;
        }
        self.slots[pos] = Slot::Occupied(key, value);
        self.len += 1;

        Ok(Insertion::inserted(pos, collisions))
    }
}

impl<K, V, P> SlotTable<K, V, P>
where
    P: ProbeStrategy,
{
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: CanonicalKey + Eq + ?Sized,
    {
        self.get_debug(key).map(|i| i.0)
    }

    /// Returns the value and the number of probes it took to find it.
    pub fn get_debug<Q>(&self, key: &Q) -> Option<(&V, usize)>
    where
        K: Borrow<Q>,
        Q: CanonicalKey + Eq + ?Sized,
    {
        let (pos, probes) = self.find(key)?;
        self.slots[pos].entry().map(|(_, v)| (v, probes))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: CanonicalKey + Eq + ?Sized,
    {
        let (pos, _) = self.find(key)?;
        match &mut self.slots[pos] {
            Slot::Occupied(_, v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: CanonicalKey + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot. Returns the removed value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: CanonicalKey + Eq + ?Sized,
    {
        let (pos, _) = self.find(key)?;
        let (_, value) = mem::replace(&mut self.slots[pos], Slot::Tombstone).into_entry()?;
        self.len -= 1;
        self.tombstones += 1;
        Some(value)
    }

    /// Removes `key`. Returns `true` if there was a live entry for it.
    #[inline]
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: CanonicalKey + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Walks the probe sequence of `key`. Returns the slot index holding it and the amount of
    /// probes before it was reached.
    fn find<Q>(&self, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: CanonicalKey + Eq + ?Sized,
    {
        let hash = KeyHash::of(key);

        for (i, pos) in ProbeSeq::new(&self.probe, &hash, self.slots.len()).enumerate() {
            match &self.slots[pos] {
                Slot::Empty => return None,
                Slot::Occupied(k, _) if Q::eq(key, k.borrow()) => return Some((pos, i)),
                _ => continue,
            }
        }

        None
    }
}

impl<K, V, P> SlotTable<K, V, P> {
    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Current `len / capacity`.
    #[inline]
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.capacity() as f32
    }

    /// The load factor the table grows at.
    #[inline]
    pub fn max_load_factor(&self) -> f32 {
        self.load_factor
    }

    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    #[inline]
    pub fn strategy(&self) -> &P {
        &self.probe
    }

    /// Drops all entries and goes back to the initial capacity.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.initial_capacity);
        self.len = 0;
        self.tombstones = 0;
    }

    /// Live entries in slot order (not insertion order).
    #[inline]
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries::new(&self.slots, self.len)
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.entries())
    }

    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.entries())
    }

    /// A printable dump of every slot.
    #[inline]
    pub fn layout(&self) -> Layout<'_, K, V> {
        Layout::new(&self.slots, self.len)
    }
}

impl<K, V, P> Debug for SlotTable<K, V, P>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<'a, K, V, P> IntoIterator for &'a SlotTable<K, V, P> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<K, V, P> IntoIterator for SlotTable<K, V, P> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots, self.len)
    }
}

impl<K, V, P> Extend<(K, V)> for SlotTable<K, V, P>
where
    K: CanonicalKey + Eq,
    P: ProbeStrategy,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();

        // Grow once up front instead of step by step. Duplicate keys can make this overshoot.
        if lower > 0 && Some(lower) == upper {
            self.reserve(lower);
        }

        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V, P> FromIterator<(K, V)> for SlotTable<K, V, P>
where
    K: CanonicalKey + Eq,
    P: ProbeStrategy + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
