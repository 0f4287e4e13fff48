//! wedplan - wedding RSVP site and planner dashboard
//!
//! One binary serves two audiences. Guests get a landing page, the event
//! details, and an RSVP form; the couple unlocks a password-gated planner
//! dashboard with a task checklist, the guest roster, event configuration,
//! and AI-assisted content drafting.
//!
//! All records live in JSON slots on disk (via the `slotstore` crate) and
//! load with defaults when missing or corrupt, so a fresh install and a
//! damaged data directory both start cleanly.
//!
//! # Modules
//!
//! - [`domain`] - Tasks, RSVPs, and the event configuration record
//! - [`store`] - The persisted application state and its mutations
//! - [`llm`] - Content generation client trait and the Gemini implementation
//! - [`assistant`] - The three planner-facing generation operations
//! - [`tui`] - Terminal UI: guest screens and the planner dashboard
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod assistant;
pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod store;
pub mod tui;

// Re-export commonly used types
pub use assistant::Assistant;
pub use config::{AccessConfig, Config, LlmConfig, StorageConfig};
pub use domain::{Attendance, EventDetails, MAX_PARTY_SIZE, Rsvp, Task, TaskCategory};
pub use llm::{GeminiClient, LlmClient, LlmError, create_client};
pub use store::{PlannerStore, RsvpSummary};
