//! SlotStore - generic persistent JSON slot storage
//!
//! A slot is a named, independently persisted JSON value. Loading a slot
//! that is missing or fails to decode yields the type's default instead of
//! an error; saving re-encodes the whole value and replaces the file.
//!
//! This crate knows nothing about the shapes it stores. Callers pick the
//! slot names and the serde types.

mod store;

pub use store::{SlotStore, StoreError};
