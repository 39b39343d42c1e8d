use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    /// A key could not be encoded into its canonical form.
    Bincode(bincode::Error),
    /// Load factor outside `(0, 1]`, or too high for the probe strategy.
    InvalidLoadFactor(f32),
    /// Quadratic probing coefficients without a guarantee to find a free slot.
    UnsafeCoefficients { c1: usize, c2: usize },
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bincode(..), Self::Bincode(..)) => true,
            (Self::InvalidLoadFactor(a), Self::InvalidLoadFactor(b)) => a.to_bits() == b.to_bits(),
            (
                Self::UnsafeCoefficients { c1, c2 },
                Self::UnsafeCoefficients { c1: o1, c2: o2 },
            ) => c1 == o1 && c2 == o2,
            (_, _) => false,
        }
    }
}

impl From<bincode::Error> for Error {
    fn from(value: bincode::Error) -> Self {
        Self::Bincode(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bincode(err) => write!(f, "failed to encode key: {err}"),
            Self::InvalidLoadFactor(lf) => write!(f, "invalid load factor {lf}"),
            Self::UnsafeCoefficients { c1, c2 } => write!(
                f,
                "quadratic coefficients c1={c1}, c2={c2} don't guarantee a free slot"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bincode(err) => Some(err),
            _ => None,
        }
    }
}
