//! Core traits defined in `folio-core` and implemented by other crates.

pub mod store;

pub use store::KeyValueStore;
