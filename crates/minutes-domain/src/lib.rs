//! Minutes Domain Layer
//!
//! Core concepts shared by every other crate in the workspace. This crate has
//! no external dependencies: it defines the meeting segment, the extraction
//! schema every archived record must satisfy, and the trait boundary to the
//! text-generation model.
//!
//! ## Key Concepts
//!
//! - **Segment**: one meeting's raw text, isolated by a separator line
//! - **Schema**: the fixed set of typed fields a valid extraction must contain
//! - **LlmProvider**: the seam to an external generative model

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod schema;
pub mod segment;
pub mod traits;

// Re-exports for convenience
pub use schema::{FieldKind, FieldSpec, MEETING_SCHEMA};
pub use segment::Segment;
