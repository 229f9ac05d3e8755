//! Narrative report rendering.
//!
//! Thin formatting layer over a finished [`AnalysisResult`]: a banner, the
//! summary and reasons, the streaming-infrastructure details, and a
//! legal-basis paragraph matched to the confidence level. No analysis logic
//! lives here.

use crate::analysis::AnalysisResult;
use crate::config::MAX_DISPLAY_URL_LEN;
use crate::scoring::{mib, ConfidenceLevel};
use crate::utils::truncate_chars;

const BANNER_WIDTH: usize = 70;
const TITLE: &str = "NETWORK CAPTURE EVIDENCE REPORT";

const INSUFFICIENT_TEXT: &str =
    "Capture analysis did not find sufficient evidence of direct streaming delivery.";

const BASIS_HIGH: &str = "The captured network traffic demonstrates that the site itself delivers \
the streaming media: the playlist and media segments were served in direct response to requests \
initiated by the site. This supports treating the operator as the direct distributor of the \
content.";

const BASIS_MEDIUM: &str = "The captured network traffic shows substantial indicators of direct \
streaming delivery, though the evidence is not conclusive on its own. Corroborating material is \
recommended before treating the operator as the direct distributor.";

const BASIS_LOW: &str = "The captured network traffic contains limited indicators of streaming \
delivery. The evidence is insufficient to establish direct distribution and should be treated as \
an investigative lead only.";

fn legal_basis(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => BASIS_HIGH,
        ConfidenceLevel::Medium => BASIS_MEDIUM,
        _ => BASIS_LOW,
    }
}

/// Renders the narrative evidence report for an analysis result.
///
/// When the verdict is negative the report short-circuits to a single
/// insufficient-evidence paragraph under the banner. Otherwise it contains
/// the summary block, the numbered reasons, the streaming-infrastructure
/// details (playlist URL truncated to 100 characters, no ellipsis), and the
/// legal-basis paragraph for the confidence level.
pub fn render_report(result: &AnalysisResult) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut lines: Vec<String> = vec![banner.clone(), TITLE.to_string(), banner.clone()];
    lines.push(String::new());

    if !result.is_streaming_provider {
        lines.push(INSUFFICIENT_TEXT.to_string());
        lines.push(String::new());
        lines.push(banner);
        return lines.join("\n");
    }

    lines.push(result.summary.clone());
    lines.push(String::new());

    lines.push("Supporting evidence:".to_string());
    for (i, reason) in result.reasons.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, reason));
    }
    lines.push(String::new());

    lines.push("Streaming infrastructure:".to_string());
    let ev = &result.streaming_evidence;
    if let Some(playlist) = &ev.playlist_url {
        lines.push(format!(
            "  Playlist: {}",
            truncate_chars(playlist, MAX_DISPLAY_URL_LEN)
        ));
    }
    if let Some(player) = &ev.player_domain {
        lines.push(format!("  Player page host: {player}"));
    }
    if let Some(cdn) = &ev.cdn_domain {
        lines.push(format!("  CDN domain: {cdn}"));
    }
    lines.push(format!("  Segments captured: {}", ev.total_segments));
    if ev.total_segment_bytes > 0 {
        lines.push(format!(
            "  Segment payload: {:.1} MiB",
            mib(ev.total_segment_bytes)
        ));
    }
    if let Some(pattern) = &ev.sequential_pattern {
        lines.push(format!(
            "  Naming pattern: {} (indices {}-{})",
            pattern.template, pattern.min_index, pattern.max_index
        ));
    }
    let players = ev.player_script_urls.len();
    if players > 0 {
        lines.push(format!("  Player scripts: {players}"));
    }
    lines.push(String::new());

    lines.push(legal_basis(result.confidence).to_string());
    lines.push(String::new());
    lines.push(banner);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_json;

    fn streaming_result() -> AnalysisResult {
        let mut entries = vec![
            r#"{"request":{"url":"https://cdn.example.com/live/index.m3u8"}}"#.to_string(),
        ];
        for i in 1..=12 {
            entries.push(format!(
                r#"{{"request":{{"url":"https://cdn.example.com/live/seg{i:04}.ts"}},"response":{{"content":{{"mimeType":"video/mp2t","size":200000}}}}}}"#
            ));
        }
        let raw = format!(r#"{{"log":{{"entries":[{}]}}}}"#, entries.join(","));
        analyze_json(&raw)
    }

    #[test]
    fn test_report_has_banner_and_title() {
        let report = render_report(&streaming_result());
        assert!(report.starts_with(&"=".repeat(70)));
        assert!(report.contains(TITLE));
    }

    #[test]
    fn test_negative_verdict_short_circuits() {
        let result = analyze_json(r#"{"log":{"entries":[]}}"#);
        let report = render_report(&result);
        assert!(report.contains(INSUFFICIENT_TEXT));
        assert!(!report.contains("Supporting evidence:"));
        assert!(!report.contains("Streaming infrastructure:"));
    }

    #[test]
    fn test_positive_report_blocks() {
        let report = render_report(&streaming_result());
        assert!(report.contains("Supporting evidence:"));
        assert!(report.contains("1. "));
        assert!(report.contains("Streaming infrastructure:"));
        assert!(report.contains("Playlist: https://cdn.example.com/live/index.m3u8"));
        assert!(report.contains("Segments captured: 12"));
        assert!(report.contains("Naming pattern: seg#.ts"));
    }

    #[test]
    fn test_playlist_url_truncated_to_100_chars() {
        let long_path = "p".repeat(150);
        let raw = format!(
            r#"{{"log":{{"entries":[
                {{"request":{{"url":"https://cdn.example.com/{long_path}/x.m3u8"}}}},
                {{"request":{{"url":"https://cdn.example.com/s/seg1.ts"}}}},
                {{"request":{{"url":"https://cdn.example.com/s/seg2.ts"}}}},
                {{"request":{{"url":"https://cdn.example.com/s/seg3.ts"}}}}
            ]}}}}"#
        );
        let result = analyze_json(&raw);
        assert!(result.is_streaming_provider);
        let report = render_report(&result);

        let playlist_line = report
            .lines()
            .find(|l| l.trim_start().starts_with("Playlist: "))
            .expect("playlist line present");
        let rendered_url = playlist_line.trim_start().strip_prefix("Playlist: ").unwrap();
        assert_eq!(rendered_url.chars().count(), 100);
        assert!(!rendered_url.ends_with("..."));
    }

    #[test]
    fn test_legal_basis_selected_by_level() {
        assert_eq!(legal_basis(ConfidenceLevel::High), BASIS_HIGH);
        assert_eq!(legal_basis(ConfidenceLevel::Medium), BASIS_MEDIUM);
        assert_eq!(legal_basis(ConfidenceLevel::Low), BASIS_LOW);
        assert_eq!(legal_basis(ConfidenceLevel::None), BASIS_LOW);
    }

    #[test]
    fn test_high_confidence_report_uses_high_basis() {
        let report = render_report(&streaming_result());
        assert!(report.contains("direct distributor of the"));
    }
}
