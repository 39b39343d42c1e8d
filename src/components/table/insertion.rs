/// What a single `set` did to the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insertion<V> {
    position: usize,
    collisions: usize,
    inserted: bool,
    resized: bool,
    replaced: Option<V>,
}

impl<V> Insertion<V> {
    /// A new entry was written at `position`.
    #[inline]
    pub(crate) fn inserted(position: usize, collisions: usize) -> Self {
        Self {
            position,
            collisions,
            inserted: true,
            resized: false,
            replaced: None,
        }
    }

    /// An existing key had its value at `position` replaced by a new one.
    #[inline]
    pub(crate) fn updated(position: usize, collisions: usize, replaced: V) -> Self {
        Self {
            position,
            collisions,
            inserted: false,
            resized: false,
            replaced: Some(replaced),
        }
    }

    #[inline]
    pub(crate) fn with_resized(mut self, resized: bool) -> Self {
        self.resized = resized;
        self
    }

    /// Slot index the entry ended up in.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of probes before the final slot was found.
    #[inline]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    #[inline]
    pub fn had_collision(&self) -> bool {
        self.collisions > 0
    }

    /// True if the key was not present before (so the table's length grew by one).
    #[inline]
    pub fn is_inserted(&self) -> bool {
        self.inserted
    }

    /// True if the table had to grow before the entry could be placed.
    #[inline]
    pub fn resized(&self) -> bool {
        self.resized
    }

    #[inline]
    pub fn replaced(&self) -> Option<&V> {
        self.replaced.as_ref()
    }

    #[inline]
    pub fn into_replaced(self) -> Option<V> {
        self.replaced
    }
}
