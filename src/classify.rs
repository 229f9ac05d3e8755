//! Streaming URL classification.
//!
//! This module implements the per-URL detectors: streaming classification by
//! extension, MIME type, or segment-name pattern, plus the player-script and
//! suspicious-hostname predicates. All predicates are pure and total over
//! arbitrary strings.
//!
//! Classification is order-sensitive by design: extension beats MIME beats
//! segment regex, and the first match wins with no fallthrough. The fixed
//! pattern tables live in [`crate::config`].

use std::sync::LazyLock;

use regex::Regex;
use strum_macros::EnumIter as EnumIterMacro;
use url::Url;

use crate::config::{
    PLAYER_SCRIPT_PATTERNS, SEGMENT_PATH_PATTERNS, STREAMING_EXTENSIONS, STREAMING_MIME_MARKERS,
    SUSPICIOUS_DOMAIN_PATTERNS,
};

/// How a URL was identified as streaming traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DetectionMethod {
    /// Matched a streaming container/segment file extension.
    Extension,
    /// Matched a streaming MIME-type marker.
    MimeType,
    /// Matched a segment-naming pattern in the URL path.
    SegmentPattern,
}

impl DetectionMethod {
    /// Returns a stable identifier for the detection method.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Extension => "extension",
            DetectionMethod::MimeType => "mime_type",
            DetectionMethod::SegmentPattern => "segment_pattern",
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positive streaming classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingMatch {
    /// Evidence tag: the matched extension without its dot, `"mime"`, or
    /// `"segment"`.
    pub tag: &'static str,
    /// Which detector produced the match.
    pub method: DetectionMethod,
}

fn compile_table(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("fixed pattern table must compile"))
        .collect()
}

static SEGMENT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_table(SEGMENT_PATH_PATTERNS));
static PLAYER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_table(PLAYER_SCRIPT_PATTERNS));
static SUSPICIOUS_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_table(SUSPICIOUS_DOMAIN_PATTERNS));

/// Isolates the path portion of a URL for segment-name matching.
///
/// Falls back to the input with any query/fragment stripped when the URL has
/// no parseable base, so relative references still get path matching.
fn url_path(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        return parsed.path().to_string();
    }
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].to_string()
}

/// Classifies a URL (plus its response MIME type) as streaming traffic.
///
/// Checks run in fixed priority order, first match wins:
/// 1. streaming file extensions (substring of the lower-cased URL),
/// 2. streaming MIME-type markers (substring of the lower-cased MIME type),
/// 3. segment-naming regexes against the URL path only.
///
/// Returns `None` when nothing matches.
///
/// # Arguments
///
/// * `url` - The request URL
/// * `mime_type` - The response MIME type (may be empty)
pub fn classify_url(url: &str, mime_type: &str) -> Option<StreamingMatch> {
    let url_lower = url.to_lowercase();
    for ext in STREAMING_EXTENSIONS {
        if url_lower.contains(ext) {
            return Some(StreamingMatch {
                tag: &ext[1..],
                method: DetectionMethod::Extension,
            });
        }
    }

    let mime_lower = mime_type.to_lowercase();
    if !mime_lower.is_empty()
        && STREAMING_MIME_MARKERS
            .iter()
            .any(|marker| mime_lower.contains(marker))
    {
        return Some(StreamingMatch {
            tag: "mime",
            method: DetectionMethod::MimeType,
        });
    }

    let path = url_path(url);
    if SEGMENT_RES.iter().any(|re| re.is_match(&path)) {
        return Some(StreamingMatch {
            tag: "segment",
            method: DetectionMethod::SegmentPattern,
        });
    }

    None
}

/// Whether a URL looks like a media player script.
pub fn is_player_script(url: &str) -> bool {
    PLAYER_RES.iter().any(|re| re.is_match(url))
}

/// Whether a hostname follows a dedicated media/CDN subdomain convention.
pub fn is_suspicious_domain(domain: &str) -> bool {
    SUSPICIOUS_RES.iter().any(|re| re.is_match(domain))
}
