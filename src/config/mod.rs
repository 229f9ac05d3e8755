//! Application configuration and constants.
//!
//! This module provides:
//! - Detection pattern tables (streaming extensions, MIME markers, regex lists)
//! - CDN/proxy response-header constants
//! - Sequence-detection thresholds and scoring weights
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
