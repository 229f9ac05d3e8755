use super::*;
use crate::capture::CaptureEntry;

fn entry(url: &str) -> CaptureEntry {
    CaptureEntry {
        url: url.to_string(),
        ..Default::default()
    }
}

fn entry_with_size(url: &str, mime: &str, size: u64) -> CaptureEntry {
    CaptureEntry {
        url: url.to_string(),
        mime_type: mime.to_string(),
        content_size: size,
        ..Default::default()
    }
}

#[test]
fn test_empty_capture() {
    let evidence = collect_evidence(&Capture::default());
    assert_eq!(evidence.total_requests, 0);
    assert!(evidence.unique_domains.is_empty());
    assert!(evidence.streaming.playlist_url.is_none());
    assert_eq!(evidence.streaming.total_segments, 0);
}

#[test]
fn test_playlist_last_one_wins() {
    let capture = Capture {
        entries: vec![
            entry("https://a.example/first.m3u8"),
            entry("https://a.example/second.m3u8"),
        ],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(
        evidence.streaming.playlist_url.as_deref(),
        Some("https://a.example/second.m3u8")
    );
}

#[test]
fn test_player_domain_from_referer() {
    let mut playlist = entry("https://media.example.net/live.m3u8");
    playlist
        .request_headers
        .insert("referer".into(), "https://watch.example.com/show".into());
    let capture = Capture {
        entries: vec![playlist],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(
        evidence.streaming.player_domain.as_deref(),
        Some("watch.example.com")
    );
}

#[test]
fn test_player_domain_falls_back_to_playlist_host() {
    let capture = Capture {
        entries: vec![entry("https://media.example.net/live.m3u8")],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(
        evidence.streaming.player_domain.as_deref(),
        Some("media.example.net")
    );
}

#[test]
fn test_segment_routing_and_byte_total() {
    let capture = Capture {
        entries: vec![
            entry_with_size("https://a.example/s/0001.ts", "video/mp2t", 1000),
            entry_with_size("https://a.example/s/0002.ts", "video/mp2t", 2000),
            entry_with_size("https://a.example/clip.flv", "", 500),
        ],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(evidence.streaming.segment_urls.len(), 2);
    assert_eq!(evidence.streaming.total_segment_bytes, 3000);
    // .flv is streaming but not a segment tag
    assert_eq!(evidence.streaming.video_urls.len(), 1);
}

#[test]
fn test_mime_only_match_routes_to_video_list() {
    let capture = Capture {
        entries: vec![entry_with_size(
            "https://a.example/content/watch",
            "application/vnd.apple.mpegurl",
            100,
        )],
    };
    let evidence = collect_evidence(&capture);
    assert!(evidence.streaming.playlist_url.is_none());
    assert_eq!(evidence.streaming.video_urls.len(), 1);
    assert_eq!(evidence.streaming.total_segment_bytes, 0);
}

#[test]
fn test_cdn_header_observations() {
    let mut e = entry("https://a.example/x");
    e.response_headers
        .insert("cf-ray".into(), "abc123-FRA".into());
    e.response_headers.insert("server".into(), "nginx".into());
    let capture = Capture { entries: vec![e] };
    let evidence = collect_evidence(&capture);

    let cloudflare = &evidence.cdn_detection["Cloudflare"];
    assert_eq!(cloudflare.len(), 1);
    assert_eq!(cloudflare[0].domain, "a.example");
    assert_eq!(cloudflare[0].header, "cf-ray");
    assert_eq!(cloudflare[0].value, "abc123-FRA");
    assert!(evidence.cdn_detection.contains_key("Server"));
}

#[test]
fn test_cdn_header_value_truncated() {
    let mut e = entry("https://a.example/x");
    e.response_headers.insert("via".into(), "y".repeat(300));
    let capture = Capture { entries: vec![e] };
    let evidence = collect_evidence(&capture);
    assert_eq!(evidence.cdn_detection["Proxy/CDN"][0].value.len(), 100);
}

#[test]
fn test_unparseable_url_still_counted() {
    let capture = Capture {
        entries: vec![entry("::not a url::"), entry("https://a.example/x")],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(evidence.total_requests, 2);
    assert_eq!(evidence.unique_domains.len(), 1);
}

#[test]
fn test_streaming_domains_deduplicated_in_first_seen_order() {
    let capture = Capture {
        entries: vec![
            entry("https://stream2.example.com/a"),
            entry("https://cdn1.example.com/b"),
            entry("https://stream2.example.com/c"),
        ],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(
        evidence.streaming.streaming_domains,
        vec!["stream2.example.com", "cdn1.example.com"]
    );
    // First streaming-style hostname becomes the CDN domain
    assert_eq!(
        evidence.streaming.cdn_domain.as_deref(),
        Some("stream2.example.com")
    );
}

#[test]
fn test_cdn_domain_from_segment_frequency() {
    let capture = Capture {
        entries: vec![
            entry("https://alpha.example/s/0001.ts"),
            entry("https://beta.example/s/0002.ts"),
            entry("https://beta.example/s/0003.ts"),
        ],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(evidence.streaming.cdn_domain.as_deref(), Some("beta.example"));
}

#[test]
fn test_cdn_domain_frequency_tie_prefers_first_seen() {
    let capture = Capture {
        entries: vec![
            entry("https://zeta.example/s/0001.ts"),
            entry("https://alpha.example/s/0002.ts"),
        ],
    };
    let evidence = collect_evidence(&capture);
    // Tie on count: first-seen host wins, not the lexicographically smaller
    assert_eq!(evidence.streaming.cdn_domain.as_deref(), Some("zeta.example"));
}

#[test]
fn test_sequence_reinforces_segment_count() {
    // Numbered .dat files: invisible to extension/MIME checks, but the
    // sequential group raises the reported count
    let entries: Vec<CaptureEntry> = (1..=8)
        .map(|i| entry(&format!("https://a.example/d/blk{i:04}.dat")))
        .collect();
    let capture = Capture { entries };
    let evidence = collect_evidence(&capture);
    assert_eq!(evidence.streaming.segment_urls.len(), 0);
    assert_eq!(evidence.streaming.total_segments, 8);
    assert!(evidence.streaming.sequential_pattern.is_some());
}

#[test]
fn test_small_sequence_does_not_reinforce() {
    let entries: Vec<CaptureEntry> = (1..=4)
        .map(|i| entry(&format!("https://a.example/d/blk{i:04}.dat")))
        .collect();
    let capture = Capture { entries };
    let evidence = collect_evidence(&capture);
    // The group qualifies (continuous, >=3) but is below the reinforcement
    // threshold of 5
    assert_eq!(evidence.sequences.len(), 1);
    assert_eq!(evidence.streaming.total_segments, 0);
    assert!(evidence.streaming.sequential_pattern.is_none());
}

#[test]
fn test_player_scripts_collected() {
    let capture = Capture {
        entries: vec![
            entry("https://a.example/js/jwplayer.js"),
            entry("https://a.example/js/app.js"),
        ],
    };
    let evidence = collect_evidence(&capture);
    assert_eq!(
        evidence.streaming.player_script_urls,
        vec!["https://a.example/js/jwplayer.js"]
    );
}
