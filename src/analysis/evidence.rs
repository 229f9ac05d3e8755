//! Evidence and result types.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::scoring::ConfidenceLevel;
use crate::sequence::SequentialPattern;

/// One observation of a CDN/proxy identification header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CdnObservation {
    /// Host that served the response (empty when the URL had no host).
    pub domain: String,
    /// The response header that identified the infrastructure.
    pub header: String,
    /// Recorded header value, truncated for display.
    pub value: String,
}

/// CDN/proxy label → observations, in deterministic (sorted-label) order.
pub type CdnDetection = BTreeMap<String, Vec<CdnObservation>>;

/// Streaming evidence accumulated over one analysis pass.
///
/// Owned by a single run and discarded with its result; analyses are
/// stateless and independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreamingEvidence {
    /// Captured playlist manifest URL (the last one seen wins).
    pub playlist_url: Option<String>,
    /// Segment URLs, in capture order.
    pub segment_urls: Vec<String>,
    /// Other streaming media URLs, in capture order.
    pub video_urls: Vec<String>,
    /// Player-script URLs, in capture order.
    pub player_script_urls: Vec<String>,
    /// Streaming-style hostnames, first-seen order, de-duplicated.
    pub streaming_domains: Vec<String>,
    /// Host of the page that loaded the playlist (Referer of the playlist
    /// request, else the playlist host).
    pub player_domain: Option<String>,
    /// Dominant content-delivery host, if one could be attributed.
    pub cdn_domain: Option<String>,
    /// Reported segment count: captured segment URLs, reinforced by the
    /// largest qualifying sequential group.
    pub total_segments: usize,
    /// Total bytes of captured segment payloads.
    pub total_segment_bytes: u64,
    /// The sequential pattern selected for the narrative, if any qualified
    /// with enough members.
    pub sequential_pattern: Option<SequentialPattern>,
}

/// Everything the aggregation pass hands to the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisEvidence {
    /// Number of logged exchanges, including ones with unparseable URLs.
    pub total_requests: usize,
    /// Every distinct host observed in the capture.
    pub unique_domains: BTreeSet<String>,
    /// CDN/proxy header observations by infrastructure label.
    pub cdn_detection: CdnDetection,
    /// Accumulated streaming evidence.
    pub streaming: StreamingEvidence,
    /// All qualifying sequential patterns, first-seen order. The scorer uses
    /// all of them; the narrative uses only `streaming.sequential_pattern`.
    pub sequences: Vec<SequentialPattern>,
}

/// Terminal result of one capture analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Number of logged exchanges analyzed.
    pub total_requests: usize,
    /// Every distinct host observed in the capture.
    pub unique_domains: BTreeSet<String>,
    /// CDN/proxy header observations by infrastructure label.
    pub cdn_detection: CdnDetection,
    /// Streaming evidence backing the verdict.
    pub streaming_evidence: StreamingEvidence,
    /// Whether the capture shows the site delivering streaming media
    /// directly.
    pub is_streaming_provider: bool,
    /// Categorical confidence in the verdict.
    pub confidence: ConfidenceLevel,
    /// Numeric confidence score, clamped to 0-100.
    pub score: u32,
    /// Itemized reasons supporting the verdict, in rule order.
    pub reasons: Vec<String>,
    /// Fixed-order human-readable summary.
    pub summary: String,
}

impl AnalysisResult {
    /// Result for a capture that could not be parsed: zero counts, no
    /// verdict, and a summary naming the failure. Parse failure is a normal
    /// terminal state of an analysis, not an error to propagate.
    pub fn parse_failure(reason: &str) -> Self {
        AnalysisResult {
            total_requests: 0,
            unique_domains: BTreeSet::new(),
            cdn_detection: CdnDetection::new(),
            streaming_evidence: StreamingEvidence::default(),
            is_streaming_provider: false,
            confidence: ConfidenceLevel::None,
            score: 0,
            reasons: Vec::new(),
            summary: format!("Capture analysis failed: {reason}"),
        }
    }
}
