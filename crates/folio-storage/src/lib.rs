//! # folio-storage
//!
//! Key-value store providers for Folio. Supports two modes:
//!
//! - **memory**: In-process map using [dashmap](https://crates.io/crates/dashmap),
//!   with an optional byte quota
//! - **file**: One file per key under a root directory
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
pub mod manager;
pub mod providers;

pub use keys::StoreKeys;
pub use manager::StoreManager;
