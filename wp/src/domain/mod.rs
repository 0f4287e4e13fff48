//! Domain types for wedplan
//!
//! The three persisted record kinds: Task, Rsvp, EventDetails.
//! Flat aggregates with string identifiers and no cross-entity keys.
//! All serialize with camelCase field names, the shape the stored JSON
//! slots carry on disk.

mod details;
mod rsvp;
mod task;

pub use details::EventDetails;
pub use rsvp::{Attendance, MAX_PARTY_SIZE, Rsvp};
pub use task::{Task, TaskCategory};
