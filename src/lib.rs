//! capture_evidence library: network-capture evidence engine
//!
//! This library analyzes a recorded HTTP session log (HAR-shaped JSON) and
//! determines whether the captured site operates as a direct media/streaming
//! distributor, producing a weighted confidence verdict with itemized
//! supporting reasons.
//!
//! The engine is pure and synchronous: it consumes an already-materialized
//! capture, runs a single aggregation pass plus a global sequence-detection
//! phase, and emits a terminal [`AnalysisResult`]. It performs no network
//! I/O and keeps no state between calls; independent analyses may run in
//! parallel.
//!
//! # Example
//!
//! ```
//! use capture_evidence::analyze_json;
//!
//! let raw = r#"{"log":{"entries":[
//!     {"request":{"url":"https://cdn1.example.com/live/index.m3u8"}},
//!     {"request":{"url":"https://cdn1.example.com/live/seg0001.ts"},
//!      "response":{"content":{"mimeType":"video/mp2t","size":200000}}}
//! ]}}"#;
//!
//! let result = analyze_json(raw);
//! println!("score {}/100 ({})", result.score, result.confidence);
//! for reason in &result.reasons {
//!     println!("- {reason}");
//! }
//! ```

#![warn(missing_docs)]

mod analysis;
mod capture;
mod classify;
pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
mod report;
mod scoring;
mod sequence;
mod utils;

// Re-export public API
pub use analysis::{
    analyze, analyze_json, analyze_value, collect_evidence, AnalysisEvidence, AnalysisResult,
    CdnDetection, CdnObservation, StreamingEvidence,
};
pub use capture::{Capture, CaptureEntry};
pub use classify::{classify_url, is_player_script, is_suspicious_domain, DetectionMethod,
    StreamingMatch};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::CaptureParseError;
pub use report::render_report;
pub use scoring::{build_summary, score_evidence, ConfidenceLevel, ScoredVerdict};
pub use sequence::{detect_sequences, SequentialPattern};
