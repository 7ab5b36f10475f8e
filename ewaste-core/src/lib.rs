//! Core types and service wiring for the e-waste drop-off locator.

/// Validated, read-only snapshot of a location source.
pub mod catalog;
/// Multi-criteria filtering of location records.
pub mod filter;
/// Domain models and identifiers shared by all sources.
pub mod model;
/// Traits describing location sources.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use catalog::*;
pub use filter::*;
pub use model::*;
pub use ports::*;
pub use service::*;
