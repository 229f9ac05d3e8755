//! Error handling.
//!
//! This module provides:
//! - Error type definitions for capture parsing
//! - Initialization error types (logger setup)
//!
//! Capture parse failures are a normal, reportable terminal state of an
//! analysis: the engine converts them into a result with a failure summary
//! rather than propagating them past its boundary. Missing per-entry fields
//! are never errors at all; they default to empty values and only reduce the
//! available evidence.

mod types;

// Re-export public API
pub use types::{CaptureParseError, InitializationError};
