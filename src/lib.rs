//! # schema-probe
//!
//! Infer Arrow schemas from single JSON samples.
//!
//! A JSON object is flattened into a two-line CSV fragment (header plus one
//! data row) and handed to the Arrow CSV reader for type inference. The
//! resulting schema can be restricted to named columns, have per-column type
//! overrides applied, and is rendered either in Arrow's own textual form or
//! as a pretty-printed JSON document.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schema_probe::infer::InferenceOptions;
//! use schema_probe::pipeline;
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new(br#"{"a": true, "b": 1.5}"#.to_vec());
//! let mut output = Vec::new();
//! pipeline::run(&mut input, &mut output, true, &InferenceOptions::new())?;
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! JSON object ─▶ flatten (sorted keys) ─▶ CSV fragment ─▶ Arrow CSV
//! inference ─▶ type overrides / include filter ─▶ rendered schema
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unnecessary_wraps)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// JSON object to CSV fragment conversion
pub mod convert;

/// Schema inference over a CSV fragment
pub mod infer;

/// Schema rendering (Arrow text form or JSON document)
pub mod serialize;

/// End-to-end conversion pipeline
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
