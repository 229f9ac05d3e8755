//! Capture record model and parsing.
//!
//! This module turns a raw HAR-shaped JSON document into a typed [`Capture`]:
//! an ordered list of request/response exchanges with lower-cased header
//! maps, the response MIME type, and the response content size.
//!
//! Parsing is strict only at the top level (`log.entries` must exist); every
//! per-entry field defaults to its empty value when absent or malformed, so a
//! partially captured log still yields whatever evidence it contains.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error_handling::CaptureParseError;

/// One logged request/response exchange.
///
/// Immutable once constructed; owned exclusively by its [`Capture`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureEntry {
    /// Request URL (empty string when the capture omitted it).
    pub url: String,
    /// Request headers, names lower-cased.
    pub request_headers: HashMap<String, String>,
    /// Response headers, names lower-cased.
    pub response_headers: HashMap<String, String>,
    /// Response MIME type (may be empty).
    pub mime_type: String,
    /// Response content size in bytes (0 when absent or negative).
    pub content_size: u64,
}

/// A complete, already-recorded log of HTTP exchanges from one session.
///
/// Entry order is the log order as recorded. Order matters only for
/// count/summary text and first-seen tie-breaks, never for scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capture {
    /// The logged exchanges, in log order.
    pub entries: Vec<CaptureEntry>,
}

/// One name/value header pair as recorded in the capture.
#[derive(Debug, Default, Deserialize)]
struct RawHeader {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: String,
}

/// Flattens a header pair array into a lower-cased name map. Anything that
/// is not an array, or any pair that does not decode, contributes nothing.
fn header_map(headers: Option<&Value>) -> HashMap<String, String> {
    let Some(pairs) = headers.and_then(Value::as_array) else {
        return HashMap::new();
    };
    pairs
        .iter()
        .filter_map(|pair| serde_json::from_value::<RawHeader>(pair.clone()).ok())
        .map(|h| (h.name.to_lowercase(), h.value))
        .collect()
}

impl CaptureEntry {
    // Leniency is per field: a malformed header array or size does not cost
    // the entry its URL. Garbage rows still count toward the request total.
    fn from_value(value: &Value) -> Self {
        let request = value.get("request");
        let response = value.get("response");
        let content = response.and_then(|r| r.get("content"));

        let url = request
            .and_then(|r| r.get("url"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let mime_type = content
            .and_then(|c| c.get("mimeType"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        // HAR writers emit -1 for unknown sizes; clamped to 0.
        let content_size = content
            .and_then(|c| c.get("size"))
            .and_then(Value::as_i64)
            .unwrap_or(0)
            .max(0) as u64;

        CaptureEntry {
            url,
            request_headers: header_map(request.and_then(|r| r.get("headers"))),
            response_headers: header_map(response.and_then(|r| r.get("headers"))),
            mime_type,
            content_size,
        }
    }
}

impl Capture {
    /// Parses a capture from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureParseError`] when the document is not valid JSON,
    /// has no top-level `log` field, or `log.entries` is missing or not an
    /// array. Anything below that level defaults instead of failing.
    pub fn parse(raw: &str) -> Result<Capture, CaptureParseError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Builds a capture from an already-parsed JSON document.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`Capture::parse`].
    pub fn from_value(value: &Value) -> Result<Capture, CaptureParseError> {
        let log = value.get("log").ok_or(CaptureParseError::MissingLog)?;
        let entries = log
            .get("entries")
            .and_then(Value::as_array)
            .ok_or(CaptureParseError::MissingEntries)?;

        let entries = entries.iter().map(CaptureEntry::from_value).collect();
        Ok(Capture { entries })
    }

    /// Number of logged exchanges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the capture recorded no exchanges at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all entries beyond `max`, bounding analysis work for oversized
    /// captures.
    pub fn truncate(&mut self, max: usize) {
        self.entries.truncate(max);
    }
}
