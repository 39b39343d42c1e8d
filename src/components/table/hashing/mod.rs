pub mod hash;
pub mod key;
pub mod probe;
