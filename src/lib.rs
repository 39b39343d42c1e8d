//! Open addressing hash table with interchangeable probe strategies.
//!
//! [`SlotTable`] keeps every entry directly in its slot array and resolves collisions by probing
//! along a sequence given by a [`ProbeStrategy`]: [`Linear`], [`Quadratic`] or [`Double`]
//! hashing, or a [`Probe`] picked at runtime. Deletions leave tombstones, and the table grows
//! before an insert would exceed its load factor.
//!
//! ```
//! use probemap::{DoubleTable, TableConfig, Double};
//!
//! let mut table: DoubleTable<&str, u32> =
//!     DoubleTable::with_config(TableConfig::new(Double).with_capacity(7)).unwrap();
//! table.set("a", 1);
//! table.set("a", 3);
//! assert_eq!(table.get("a"), Some(&3));
//! assert!(table.delete("a"));
//! assert!(!table.has("a"));
//! ```
//!
//! The table is meant for a single owner. Mutation needs `&mut self`, so a table can't change
//! while one of its iterators is alive. Sharing it between threads needs an outer lock that
//! also covers the rehash done by a growing `set`.

pub mod components;
pub mod error;
pub mod traits;

pub use components::table::config::TableConfig;
pub use components::table::hashing::key::{CanonicalKey, Serialized};
pub use components::table::hashing::probe::{Double, Linear, Probe, ProbeStrategy, Quadratic};
pub use components::table::{DoubleTable, LinearTable, QuadraticTable, SlotTable};
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
