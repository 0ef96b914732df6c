//! # folio-entity
//!
//! Domain entity models for the Folio portfolio site. Every struct in
//! this crate is a plain record that round-trips through the JSON shape
//! used by the snapshot file, the local store, and export files.

pub mod admin;
pub mod project;
