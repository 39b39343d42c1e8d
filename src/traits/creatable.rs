use crate::components::table::config::DEFAULT_CAPACITY;
use crate::Result;

/// Components that can be created empty with a requested capacity.
pub trait Creatable
where
    Self: Sized,
{
    #[inline]
    fn create() -> Result<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Result<Self>;
}
