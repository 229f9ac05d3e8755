//! Capture analysis engine.
//!
//! This module owns the analysis pipeline: the aggregation pass over the
//! capture, the hand-off to the confidence scorer, and the engine entry
//! points. An analysis is a pure, synchronous, single-pass computation;
//! independent calls share nothing and may run in parallel.

mod aggregate;
mod evidence;

use log::info;

use crate::capture::Capture;
use crate::scoring::{build_summary, score_evidence};

// Re-export public API
pub use aggregate::collect_evidence;
pub use evidence::{
    AnalysisEvidence, AnalysisResult, CdnDetection, CdnObservation, StreamingEvidence,
};

/// Analyzes a parsed capture.
///
/// Runs the aggregation pass, sequence detection, and scoring, and returns
/// the terminal [`AnalysisResult`]. Pure: the same capture always yields an
/// identical result.
pub fn analyze(capture: &Capture) -> AnalysisResult {
    info!("Analyzing capture with {} entries", capture.len());

    let evidence = collect_evidence(capture);
    let verdict = score_evidence(&evidence);
    let summary = build_summary(&evidence, &verdict);

    info!(
        "Analysis verdict: {} (score {}/100, {} reasons)",
        verdict.level,
        verdict.score,
        verdict.reasons.len()
    );

    AnalysisResult {
        total_requests: evidence.total_requests,
        unique_domains: evidence.unique_domains,
        cdn_detection: evidence.cdn_detection,
        streaming_evidence: evidence.streaming,
        is_streaming_provider: verdict.is_streaming_provider,
        confidence: verdict.level,
        score: verdict.score,
        reasons: verdict.reasons,
        summary,
    }
}

/// Analyzes a capture from raw JSON text.
///
/// Parse failure is a reportable terminal state, not an error: a capture
/// that cannot be decoded yields a result with zero counts, a false verdict,
/// and a summary naming the failure.
pub fn analyze_json(raw: &str) -> AnalysisResult {
    match Capture::parse(raw) {
        Ok(capture) => analyze(&capture),
        Err(e) => AnalysisResult::parse_failure(&e.to_string()),
    }
}

/// Analyzes a capture from an already-parsed JSON document.
///
/// Same failure behavior as [`analyze_json`].
pub fn analyze_value(value: &serde_json::Value) -> AnalysisResult {
    match Capture::from_value(value) {
        Ok(capture) => analyze(&capture),
        Err(e) => AnalysisResult::parse_failure(&e.to_string()),
    }
}
