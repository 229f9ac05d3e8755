//! End-to-end analysis scenarios against the public library API.

use std::io::Write;

use capture_evidence::{analyze, analyze_json, Capture, ConfidenceLevel};

/// Builds a HAR document from entry JSON fragments.
fn har(entries: &[String]) -> String {
    format!(r#"{{"log":{{"entries":[{}]}}}}"#, entries.join(","))
}

fn url_entry(url: &str) -> String {
    format!(r#"{{"request":{{"url":"{url}"}}}}"#)
}

fn media_entry(url: &str, mime: &str, size: u64) -> String {
    format!(
        r#"{{"request":{{"url":"{url}"}},"response":{{"content":{{"mimeType":"{mime}","size":{size}}}}}}}"#
    )
}

/// The streaming-site scenario: one playlist, fifteen 200 KB segments, one
/// player script.
fn streaming_site_capture() -> String {
    let mut entries = vec![url_entry("https://media7.example.com/live/master.m3u8")];
    for i in 1..=15 {
        entries.push(media_entry(
            &format!("https://media7.example.com/live/chunk_{i:03}.ts"),
            "video/mp2t",
            200_000,
        ));
    }
    entries.push(url_entry("https://media7.example.com/player/video.min.js"));
    har(&entries)
}

#[test]
fn test_streaming_site_scores_high() {
    let result = analyze_json(&streaming_site_capture());

    assert!(result.is_streaming_provider);
    assert_eq!(result.confidence, ConfidenceLevel::High);
    // playlist (40) + segments>=10 (35) + player script (15) = 90 before the
    // sequence and size bonuses; never above the clamp
    assert!(result.score >= 90);
    assert!(result.score <= 100);

    let ev = &result.streaming_evidence;
    assert_eq!(ev.total_segments, 15);
    assert_eq!(ev.total_segment_bytes, 3_000_000);
    assert_eq!(
        ev.playlist_url.as_deref(),
        Some("https://media7.example.com/live/master.m3u8")
    );
    assert_eq!(ev.player_script_urls.len(), 1);
    assert!(result.summary.contains("Verdict:"));
}

#[test]
fn test_empty_capture_yields_no_verdict() {
    let result = analyze_json(&har(&[]));
    assert_eq!(result.total_requests, 0);
    assert!(!result.is_streaming_provider);
    assert_eq!(result.confidence, ConfidenceLevel::None);
    assert_eq!(result.score, 0);
}

#[test]
fn test_ordinary_site_yields_no_verdict() {
    let entries = vec![
        url_entry("https://www.example.com/"),
        url_entry("https://www.example.com/styles/site.css"),
        url_entry("https://www.example.com/js/analytics.js"),
        media_entry("https://www.example.com/logo.png", "image/png", 4096),
    ];
    let result = analyze_json(&har(&entries));
    assert!(!result.is_streaming_provider);
    assert_eq!(result.confidence, ConfidenceLevel::None);
}

#[test]
fn test_analysis_is_idempotent() {
    let raw = streaming_site_capture();
    let first = analyze_json(&raw);
    let second = analyze_json(&raw);
    assert_eq!(first, second);
}

#[test]
fn test_adding_matching_entry_never_decreases_score() {
    let mut entries = vec![url_entry("https://media7.example.com/live/master.m3u8")];
    for i in 1..=12 {
        entries.push(media_entry(
            &format!("https://media7.example.com/live/chunk_{i:03}.ts"),
            "video/mp2t",
            1_200_000,
        ));
    }
    let before = analyze_json(&har(&entries)).score;

    entries.push(media_entry(
        "https://media7.example.com/live/chunk_013.ts",
        "video/mp2t",
        1_200_000,
    ));
    let after = analyze_json(&har(&entries)).score;

    assert!(after >= before, "score dropped from {before} to {after}");
}

#[test]
fn test_cdn_domain_tie_break_is_first_added() {
    // Both hostnames match the suspicious-domain conventions; the first one
    // added wins even though the other sorts lower lexicographically
    let entries = vec![
        url_entry("https://v9.zzz-host.example/x"),
        url_entry("https://cdn1.aaa-host.example/y"),
    ];
    let result = analyze_json(&har(&entries));
    assert_eq!(
        result.streaming_evidence.cdn_domain.as_deref(),
        Some("v9.zzz-host.example")
    );
}

#[test]
fn test_sequential_naming_alone_can_produce_evidence() {
    // Extension-less numbered resources: only the sequence detector fires
    let entries: Vec<String> = (1..=12)
        .map(|i| url_entry(&format!("https://www.example.com/data/blob{i:05}")))
        .collect();
    let result = analyze_json(&har(&entries));

    let ev = &result.streaming_evidence;
    assert_eq!(ev.total_segments, 12);
    let pattern = ev.sequential_pattern.as_ref().expect("pattern detected");
    assert_eq!(pattern.count, 12);
    assert_eq!(pattern.min_index, 1);
    assert_eq!(pattern.max_index, 12);
    assert!(pattern.is_continuous);
    // segments>=10 (35) + large sequence (30) = 65
    assert_eq!(result.score, 65);
    assert_eq!(result.confidence, ConfidenceLevel::High);
}

#[test]
fn test_capture_round_trip_through_file() {
    // Mirrors the CLI path: write the capture to disk, read it back, analyze
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(streaming_site_capture().as_bytes())
        .expect("write capture");

    let raw = std::fs::read_to_string(file.path()).expect("read capture");
    let capture = Capture::parse(&raw).expect("valid capture");
    assert_eq!(capture.len(), 17);

    let result = analyze(&capture);
    assert!(result.is_streaming_provider);
}

#[test]
fn test_result_serializes_to_json() {
    let result = analyze_json(&streaming_site_capture());
    let json = serde_json::to_string(&result).expect("serializable");
    assert!(json.contains("\"is_streaming_provider\":true"));
    assert!(json.contains("\"score\":"));
}
