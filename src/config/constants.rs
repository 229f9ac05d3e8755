//! Detection and scoring constants.
//!
//! This module defines the fixed pattern tables and numeric thresholds used
//! throughout the analysis: which URLs count as streaming traffic, when a
//! family of numbered filenames counts as a segment sequence, and how much
//! each piece of evidence contributes to the final score.

// Streaming container/segment file extensions, in match order.
// Matched as substrings of the lower-cased URL; the first hit wins and its
// tag is the extension without the leading dot.
/// Ordered list of streaming-related file extensions.
pub const STREAMING_EXTENSIONS: &[&str] = &[
    ".m3u8", ".ts", ".mp4", ".webm", ".flv", ".m4s", ".m4v", ".mpd", ".dash", ".f4v", ".f4m",
    ".ism", ".isml",
];

/// MIME-type substrings that indicate streaming media content.
pub const STREAMING_MIME_MARKERS: &[&str] = &["mpegurl", "m3u8", "mp2t", "video", "octet-stream"];

/// Ordered segment-naming patterns, applied case-insensitively to the URL
/// path. Covers the common chunked-delivery naming schemes plus purely
/// numbered media filenames.
pub const SEGMENT_PATH_PATTERNS: &[&str] = &[
    r"segment[_-]?\d+",
    r"seg[_-]?\d+",
    r"chunk[_-]?\d+",
    r"part[_-]?\d+",
    r"frag[_-]?\d+",
    r"ts[_-]?\d+",
    // 4+-digit-numbered media filenames, e.g. 00042.ts
    r"\d{4,}\.(?:ts|m4s|mp4|webm)",
    // short alpha prefix followed by a 3+-digit counter, e.g. sq0001.m4s
    r"[a-z]{1,3}\d{3,}\.(?:ts|m4s|mp4|webm)",
];

/// Player-script URL patterns (generic player/HLS/DASH script names plus
/// named player libraries), matched case-insensitively.
pub const PLAYER_SCRIPT_PATTERNS: &[&str] = &[
    r"player[\w.-]*\.js",
    r"hls[\w.-]*\.js",
    r"dash[\w.-]*\.js",
    r"video[\w.-]*\.js",
    r"jwplayer",
    r"flowplayer",
    r"plyr",
    r"videojs",
    r"mediaelement",
    r"clappr",
];

/// Hostname patterns typical of dedicated media/CDN subdomains, matched
/// case-insensitively against the host component.
pub const SUSPICIOUS_DOMAIN_PATTERNS: &[&str] = &[
    r"cdn\d*\.",
    r"stream\d*\.",
    r"video\d*\.",
    r"media\d*\.",
    r"img\d*\.",
    r"static\d*\.",
    r"s\d+\.",
    r"v\d+\.",
    r"edge\d*\.",
    r"node\d*\.",
];

// Display truncation limits
/// Maximum characters of a recorded CDN header value.
pub const MAX_HEADER_VALUE_LEN: usize = 100;
/// Maximum characters of the playlist URL in rendered output.
pub const MAX_DISPLAY_URL_LEN: usize = 100;

// Sequence detection thresholds
/// Minimum group size before a filename template is considered at all.
pub const SEQUENCE_MIN_GROUP: usize = 3;
/// Largest index gap still considered continuous.
pub const SEQUENCE_MAX_GAP: u64 = 10;
/// Group size at which a template qualifies regardless of continuity.
pub const SEQUENCE_LARGE_GROUP: usize = 10;
/// Group size at which a sequence reinforces the segment count and appears
/// in the narrative.
pub const SEQUENCE_REINFORCE_MIN: usize = 5;

// Scoring weights (additive; the segment-count tiers are mutually exclusive)
/// Points for a captured playlist manifest.
pub const POINTS_PLAYLIST: u32 = 40;
/// Points when ten or more segments were captured.
pub const POINTS_SEGMENTS_MANY: u32 = 35;
/// Points when three to nine segments were captured.
pub const POINTS_SEGMENTS_FEW: u32 = 20;
/// Points for player scripts loaded by the page.
pub const POINTS_PLAYER_SCRIPTS: u32 = 15;
/// Points for a sequential filename group with ten or more members.
pub const POINTS_SEQUENCE_LARGE: u32 = 30;
/// Points for a sequential filename group with five or more members.
pub const POINTS_SEQUENCE_SMALL: u32 = 15;
/// Points for streaming-style hostnames in the capture.
pub const POINTS_STREAMING_DOMAINS: u32 = 10;
/// Points when the captured segment payload exceeds [`SEGMENT_BYTES_BONUS_THRESHOLD`].
pub const POINTS_SEGMENT_BYTES: u32 = 10;

/// Segment-count boundary between the two scoring tiers.
pub const SEGMENTS_MANY_THRESHOLD: usize = 10;
/// Minimum segment count for the lower scoring tier.
pub const SEGMENTS_FEW_THRESHOLD: usize = 3;
/// Segment payload size (bytes) above which the size bonus applies (1 MiB).
pub const SEGMENT_BYTES_BONUS_THRESHOLD: u64 = 1024 * 1024;
/// Maximum number of streaming-style hostnames named in a reason line.
pub const MAX_DOMAINS_IN_REASON: usize = 3;

/// Upper bound of the confidence score.
pub const SCORE_CEILING: u32 = 100;
/// Score at or above which confidence is HIGH.
pub const SCORE_HIGH: u32 = 60;
/// Score at or above which confidence is MEDIUM.
pub const SCORE_MEDIUM: u32 = 30;
/// Score at or above which confidence is LOW.
pub const SCORE_LOW: u32 = 15;
