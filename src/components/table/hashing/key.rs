use crate::Result;
use serde::Serialize;
use std::borrow::Cow;

/// A key that can be reduced to a canonical byte form for hashing.
///
/// The canonical form only feeds the hash functions. Two keys with the same canonical form are
/// still told apart by `Eq`, so the mapping does not have to be injective, but it should spread
/// distinct keys well. Lookups through a borrowed form `Q` of a key type `K` require both to
/// produce the same bytes.
pub trait CanonicalKey {
    fn canonical(&self) -> Cow<'_, [u8]>;
}

impl<T: CanonicalKey + ?Sized> CanonicalKey for &T {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        (**self).canonical()
    }
}

impl<T: CanonicalKey + ?Sized> CanonicalKey for Box<T> {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        (**self).canonical()
    }
}

impl CanonicalKey for str {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl CanonicalKey for String {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl CanonicalKey for [u8] {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl CanonicalKey for Vec<u8> {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> CanonicalKey for [u8; N] {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self[..])
    }
}

impl CanonicalKey for char {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        let mut buf = [0u8; 4];
        Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec())
    }
}

impl CanonicalKey for bool {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(if *self { &b"true"[..] } else { &b"false"[..] })
    }
}

impl CanonicalKey for () {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&b"undefined"[..])
    }
}

/// `None` hashes like a null key; `Some(v)` hashes like `v`.
impl<T: CanonicalKey> CanonicalKey for Option<T> {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        match self {
            Some(v) => v.canonical(),
            None => Cow::Borrowed(&b"null"[..]),
        }
    }
}

/// Integers hash through their decimal text.
macro_rules! impl_canonical_int {
    ($($e:ty),* $(,)?) => {
        $(
            impl CanonicalKey for $e {
                #[inline]
                fn canonical(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_string().into_bytes())
                }
            }
        )*
    };
}

impl_canonical_int!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

/// Wraps any serializable value so it can be used as a key. The canonical form is the value's
/// `bincode` encoding, computed once on construction.
#[derive(Debug, Clone)]
pub struct Serialized<T> {
    value: T,
    bytes: Vec<u8>,
}

impl<T: Serialize> Serialized<T> {
    pub fn new(value: T) -> Result<Self> {
        let bytes = bincode::serialize(&value)?;
        Ok(Self { value, bytes })
    }
}

impl<T> Serialized<T> {
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: PartialEq> PartialEq for Serialized<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Serialized<T> {}

impl<T> CanonicalKey for Serialized<T> {
    #[inline]
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.bytes)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_borrowed_forms_match() {
        let owned = "hallo".to_string();
        assert_eq!(owned.canonical(), "hallo".canonical());
        assert_eq!(owned.canonical(), (&&owned).canonical());
        assert_eq!(Box::new(7u32).canonical(), 7u32.canonical());
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(&*None::<u32>.canonical(), b"null");
        assert_eq!(&*Some(12u8).canonical(), b"12");
        assert_eq!(&*().canonical(), b"undefined");
        assert_eq!(&*(-5i64).canonical(), b"-5");
        assert_eq!(&*'ß'.canonical(), "ß".as_bytes());
    }

    #[test]
    fn test_serialized() {
        let a = Serialized::new((1u32, "a".to_string())).unwrap();
        let b = Serialized::new((1u32, "a".to_string())).unwrap();
        let c = Serialized::new((2u32, "a".to_string())).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.canonical(), b.canonical());
        assert_ne!(a.canonical(), c.canonical());
        assert_eq!(c.into_inner().0, 2);
    }
}
