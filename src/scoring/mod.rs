//! Confidence scoring.
//!
//! Converts accumulated evidence into a bounded numeric score, a categorical
//! confidence level, an itemized reasons list, and the fixed-order summary
//! text. The model is additive: every rule is evaluated independently and
//! the points are summed, with only the segment-count tiers mutually
//! exclusive. The score clamps to 0-100.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{
    MAX_DOMAINS_IN_REASON, POINTS_PLAYER_SCRIPTS, POINTS_PLAYLIST, POINTS_SEGMENTS_FEW,
    POINTS_SEGMENTS_MANY, POINTS_SEGMENT_BYTES, POINTS_SEQUENCE_LARGE, POINTS_SEQUENCE_SMALL,
    POINTS_STREAMING_DOMAINS, SCORE_CEILING, SCORE_HIGH, SCORE_LOW, SCORE_MEDIUM,
    SEGMENTS_FEW_THRESHOLD, SEGMENTS_MANY_THRESHOLD, SEGMENT_BYTES_BONUS_THRESHOLD,
    SEQUENCE_LARGE_GROUP, SEQUENCE_REINFORCE_MIN,
};

use crate::analysis::AnalysisEvidence;

/// Categorical confidence in the streaming-provider verdict.
///
/// Ordered: `None < Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIterMacro,
)]
pub enum ConfidenceLevel {
    /// Evidence insufficient for any verdict.
    None,
    /// Weak indicators only.
    Low,
    /// Substantial but not conclusive indicators.
    Medium,
    /// Conclusive indicators of direct streaming delivery.
    High,
}

impl ConfidenceLevel {
    /// Returns a human-readable name for the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::None => "NONE",
            ConfidenceLevel::Low => "LOW",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::High => "HIGH",
        }
    }

    fn from_score(score: u32) -> Self {
        if score >= SCORE_HIGH {
            ConfidenceLevel::High
        } else if score >= SCORE_MEDIUM {
            ConfidenceLevel::Medium
        } else if score >= SCORE_LOW {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::None
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score, level, verdict, and reasons produced from one evidence set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVerdict {
    /// Numeric score, clamped to 0-100.
    pub score: u32,
    /// Confidence level derived from the score.
    pub level: ConfidenceLevel,
    /// True whenever the level is above [`ConfidenceLevel::None`].
    pub is_streaming_provider: bool,
    /// Reason lines in rule-evaluation order.
    pub reasons: Vec<String>,
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Bytes rendered as MiB with one decimal.
pub fn mib(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Scores an evidence set.
///
/// Rules are applied in fixed order; every satisfied rule adds its points
/// and (where defined) its reason line. Sequential-pattern points count the
/// single best group only.
pub fn score_evidence(evidence: &AnalysisEvidence) -> ScoredVerdict {
    let streaming = &evidence.streaming;
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    if streaming.playlist_url.is_some() {
        score += POINTS_PLAYLIST;
        reasons.push("Streaming playlist (m3u8) captured".to_string());
    }

    let segments = streaming.total_segments;
    if segments >= SEGMENTS_MANY_THRESHOLD {
        score += POINTS_SEGMENTS_MANY;
        reasons.push(format!("{segments} media segments captured"));
    } else if segments >= SEGMENTS_FEW_THRESHOLD {
        score += POINTS_SEGMENTS_FEW;
        reasons.push(format!("{segments} media segments captured"));
    }

    let players = streaming.player_script_urls.len();
    if players > 0 {
        score += POINTS_PLAYER_SCRIPTS;
        reasons.push(format!("{players} player script{} loaded", plural(players)));
    }

    // Only the single best sequential group counts: the first group with
    // ten or more members, else the first with five or more.
    if evidence
        .sequences
        .iter()
        .any(|p| p.count >= SEQUENCE_LARGE_GROUP)
    {
        score += POINTS_SEQUENCE_LARGE;
    } else if evidence
        .sequences
        .iter()
        .any(|p| p.count >= SEQUENCE_REINFORCE_MIN)
    {
        score += POINTS_SEQUENCE_SMALL;
    }

    if !streaming.streaming_domains.is_empty() {
        score += POINTS_STREAMING_DOMAINS;
        let named: Vec<&str> = streaming
            .streaming_domains
            .iter()
            .take(MAX_DOMAINS_IN_REASON)
            .map(String::as_str)
            .collect();
        reasons.push(format!("Streaming-style hostnames: {}", named.join(", ")));
    }

    if streaming.total_segment_bytes > SEGMENT_BYTES_BONUS_THRESHOLD {
        score += POINTS_SEGMENT_BYTES;
        reasons.push(format!(
            "Captured segment payload totals {:.1} MiB",
            mib(streaming.total_segment_bytes)
        ));
    }

    let score = score.min(SCORE_CEILING);
    let level = ConfidenceLevel::from_score(score);

    ScoredVerdict {
        score,
        level,
        is_streaming_provider: level > ConfidenceLevel::None,
        reasons,
    }
}

/// Builds the fixed-order summary text for an evidence set and its verdict.
///
/// Line order: total requests, domain count, segment count, playlist
/// presence, player-script count, narrative sequential pattern, dominant CDN
/// domain, and a closing verdict line only when the verdict is positive.
pub fn build_summary(evidence: &AnalysisEvidence, verdict: &ScoredVerdict) -> String {
    let streaming = &evidence.streaming;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Analyzed {} network request{}",
        evidence.total_requests,
        plural(evidence.total_requests)
    ));
    lines.push(format!(
        "Observed {} unique domain{}",
        evidence.unique_domains.len(),
        plural(evidence.unique_domains.len())
    ));

    if streaming.total_segments > 0 {
        lines.push(format!(
            "Identified {} streaming segment{}",
            streaming.total_segments,
            plural(streaming.total_segments)
        ));
    }
    if streaming.playlist_url.is_some() {
        lines.push("Found a streaming playlist (m3u8)".to_string());
    }
    let players = streaming.player_script_urls.len();
    if players > 0 {
        lines.push(format!("Found {players} player script{}", plural(players)));
    }
    if let Some(pattern) = &streaming.sequential_pattern {
        lines.push(format!(
            "Sequential segment naming: {} ({} files, indices {}-{})",
            pattern.template, pattern.count, pattern.min_index, pattern.max_index
        ));
    }
    if let Some(cdn) = &streaming.cdn_domain {
        lines.push(format!("Content delivered via CDN domain: {cdn}"));
    }

    if verdict.is_streaming_provider {
        lines.push(String::new());
        lines.push(format!(
            "Verdict: the site delivers streaming media directly ({} confidence, score {}/100)",
            verdict.level, verdict.score
        ));
    }

    lines.join("\n")
}
