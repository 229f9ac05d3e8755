//! Signal aggregation pass.
//!
//! A single pure fold over the capture's entries. Per entry it extracts the
//! host, scans the CDN header table, classifies the URL, and applies the
//! player-script and suspicious-hostname predicates; after the pass it runs
//! sequence detection, which needs the complete URL set. The fold owns all
//! of its accumulators, so independent analyses can run in parallel without
//! shared state.

use std::collections::HashMap;

use log::debug;

use crate::capture::{Capture, CaptureEntry};
use crate::classify::{classify_url, is_player_script, is_suspicious_domain};
use crate::config::{
    CDN_RESPONSE_HEADERS, HEADER_REFERER, MAX_HEADER_VALUE_LEN, SEQUENCE_REINFORCE_MIN,
};
use crate::domain::extract_host;
use crate::sequence::detect_sequences;
use crate::utils::truncate_chars;

use super::evidence::{AnalysisEvidence, CdnObservation};

/// Extension tags that are routed to the segment list. Everything else that
/// classifies as streaming (except the playlist) lands in the video list.
const SEGMENT_TAGS: &[&str] = &["segment", "ts", "mp4", "webm", "m4s"];

fn record_cdn_headers(evidence: &mut AnalysisEvidence, entry: &CaptureEntry, host: &str) {
    for (header, label) in CDN_RESPONSE_HEADERS {
        if let Some(value) = entry.response_headers.get(*header) {
            evidence
                .cdn_detection
                .entry((*label).to_string())
                .or_default()
                .push(CdnObservation {
                    domain: host.to_string(),
                    header: (*header).to_string(),
                    value: truncate_chars(value, MAX_HEADER_VALUE_LEN),
                });
        }
    }
}

fn record_streaming_match(evidence: &mut AnalysisEvidence, entry: &CaptureEntry, host: &str) {
    let Some(m) = classify_url(&entry.url, &entry.mime_type) else {
        return;
    };
    debug!("streaming url ({}, tag {}): {}", m.method, m.tag, entry.url);

    if m.tag == "m3u8" {
        // Later manifests overwrite earlier ones; a live session re-fetches
        // its playlist and the newest fetch is the one in use.
        evidence.streaming.playlist_url = Some(entry.url.clone());
        let referer_host = entry
            .request_headers
            .get(HEADER_REFERER)
            .map(|referer| extract_host(referer))
            .filter(|h| !h.is_empty());
        evidence.streaming.player_domain =
            referer_host.or_else(|| (!host.is_empty()).then(|| host.to_string()));
    } else if SEGMENT_TAGS.contains(&m.tag) {
        evidence.streaming.segment_urls.push(entry.url.clone());
        evidence.streaming.total_segment_bytes += entry.content_size;
    } else {
        evidence.streaming.video_urls.push(entry.url.clone());
    }
}

/// Dominant CDN host: the first streaming-style hostname when any were seen,
/// otherwise the most frequent host among segment URLs with ties broken by
/// first appearance in the capture.
fn select_cdn_domain(evidence: &AnalysisEvidence) -> Option<String> {
    if let Some(first) = evidence.streaming.streaming_domains.first() {
        return Some(first.clone());
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for url in &evidence.streaming.segment_urls {
        let host = extract_host(url);
        if host.is_empty() {
            continue;
        }
        if !counts.contains_key(&host) {
            first_seen.push(host.clone());
        }
        *counts.entry(host).or_insert(0) += 1;
    }

    // Strict comparison keeps the earliest host on ties; max_by_key would
    // keep the latest.
    let mut best: Option<(&String, usize)> = None;
    for host in &first_seen {
        let count = counts[host];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((host, count));
        }
    }
    best.map(|(host, _)| host.clone())
}

/// Runs the aggregation pass over a capture.
///
/// Pure with respect to its input: the same capture always produces the same
/// evidence, and nothing outlives the returned value.
pub fn collect_evidence(capture: &Capture) -> AnalysisEvidence {
    let mut evidence = AnalysisEvidence {
        total_requests: capture.len(),
        ..Default::default()
    };

    for entry in &capture.entries {
        let host = extract_host(&entry.url);
        if !host.is_empty() {
            evidence.unique_domains.insert(host.clone());
        }

        record_cdn_headers(&mut evidence, entry, &host);
        record_streaming_match(&mut evidence, entry, &host);

        if is_player_script(&entry.url) {
            evidence.streaming.player_script_urls.push(entry.url.clone());
        }

        if !host.is_empty()
            && is_suspicious_domain(&host)
            && !evidence.streaming.streaming_domains.contains(&host)
        {
            evidence.streaming.streaming_domains.push(host.clone());
        }
    }

    evidence.streaming.total_segments = evidence.streaming.segment_urls.len();

    // Sequence detection needs the complete URL set, so it runs after the
    // per-entry pass, over every captured URL.
    evidence.sequences = detect_sequences(capture.entries.iter().map(|e| e.url.as_str()));

    // Sequential naming can reveal segments the extension/MIME checks missed
    // (for example when the capture tool stripped MIME data), so a large
    // enough group raises the reported count.
    for pattern in &evidence.sequences {
        if pattern.count >= SEQUENCE_REINFORCE_MIN {
            evidence.streaming.total_segments = evidence.streaming.total_segments.max(pattern.count);
            if evidence.streaming.sequential_pattern.is_none() {
                evidence.streaming.sequential_pattern = Some(pattern.clone());
            }
        }
    }

    evidence.streaming.cdn_domain = select_cdn_domain(&evidence);

    debug!(
        "aggregated {} requests: {} domains, {} segments, playlist: {}",
        evidence.total_requests,
        evidence.unique_domains.len(),
        evidence.streaming.total_segments,
        evidence.streaming.playlist_url.is_some()
    );

    evidence
}

#[cfg(test)]
mod tests {
    include!("aggregate_tests.rs");
}
