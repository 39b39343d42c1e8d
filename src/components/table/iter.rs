use crate::components::table::slot::Slot;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// Iterator over the live entries of a table in slot order.
///
/// Every call to [`SlotTable::entries`] starts a fresh pass. The table can't be mutated while the
/// iterator borrows it.
///
/// [`SlotTable::entries`]: crate::components::table::SlotTable::entries
#[derive(Debug)]
pub struct Entries<'a, K, V> {
    slots: slice::Iter<'a, Slot<K, V>>,
    left: usize,
}

impl<'a, K, V> Entries<'a, K, V> {
    #[inline]
    pub(super) fn new(slots: &'a [Slot<K, V>], len: usize) -> Self {
        Self {
            slots: slots.iter(),
            left: len,
        }
    }
}

impl<'a, K, V> Clone for Entries<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            left: self.left,
        }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.slots.find_map(|i| i.entry())?;
        self.left -= 1;
        Some(next)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, K, V> ExactSizeIterator for Entries<'a, K, V> {}
impl<'a, K, V> FusedIterator for Entries<'a, K, V> {}

/// Keys of a table in slot order.
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    #[inline]
    pub(super) fn new(inner: Entries<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|i| i.0)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// Values of a table in slot order.
#[derive(Debug)]
pub struct Values<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    #[inline]
    pub(super) fn new(inner: Entries<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|i| i.1)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

/// Owned entries of a consumed table in slot order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    slots: vec::IntoIter<Slot<K, V>>,
    left: usize,
}

impl<K, V> IntoIter<K, V> {
    #[inline]
    pub(super) fn new(slots: Vec<Slot<K, V>>, len: usize) -> Self {
        Self {
            slots: slots.into_iter(),
            left: len,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.slots.find_map(|i| i.into_entry())?;
        self.left -= 1;
        Some(next)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
