//! Application initialization.
//!
//! This module provides logger setup for the CLI binary. The engine itself
//! needs no initialization: its regex tables are compiled lazily on first
//! use and all analysis state is owned by the individual call.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
