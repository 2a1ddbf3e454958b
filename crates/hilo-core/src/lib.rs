//! Core data types and query operations for hilo
//!
//! This crate holds the read-only query engine over historical climate
//! observations, independent of any storage backend or HTTP framing.
//! Storage is reached through the [`ObservationStore`] contract.

pub mod calendar;
pub mod engine;
pub mod stats;
pub mod store;
pub mod types;

pub use calendar::*;
pub use engine::*;
pub use stats::*;
pub use store::*;
pub use types::*;
