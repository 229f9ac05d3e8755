//! Sequential filename pattern detection.
//!
//! Chunked media delivery produces families of URLs that differ only by an
//! incrementing number in the filename (`seg0001.ts`, `seg0002.ts`, ...).
//! This module groups captured URLs by a normalized filename template and
//! reports the templates whose numeric indices form a dense, ordered series.
//!
//! Detection needs the full URL set before continuity can be decided, so it
//! runs in two phases: collect group membership first, evaluate each group
//! afterwards. It runs over all captured URLs, not only those already flagged
//! as streaming: sequential naming can surface evidence even when individual
//! extensions and MIME types did not trigger.

use serde::Serialize;

use crate::config::{SEQUENCE_LARGE_GROUP, SEQUENCE_MAX_GAP, SEQUENCE_MIN_GROUP};

/// A qualifying family of sequentially numbered filenames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequentialPattern {
    /// Filename template with every digit run replaced by `#`.
    pub template: String,
    /// Number of captured URLs matching the template.
    pub count: usize,
    /// Smallest numeric index observed.
    pub min_index: u64,
    /// Largest numeric index observed.
    pub max_index: u64,
    /// Whether no gap between consecutive distinct indices exceeds the
    /// continuity threshold.
    pub is_continuous: bool,
    /// Mean gap between consecutive distinct indices (0.0 with fewer than
    /// two distinct indices).
    pub average_gap: f64,
}

/// Final path segment of a URL, query and fragment stripped.
fn filename_of(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    path.rsplit('/').next().unwrap_or(path)
}

/// Maximal digit runs of a filename, in order of occurrence.
fn digit_runs(name: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            runs.push(&name[start..i]);
        } else {
            i += 1;
        }
    }
    runs
}

/// Sequence index of a filename: the longest digit run, ties broken by first
/// occurrence. Short runs are usually version or size tokens; long runs are
/// far more likely frame/segment counters.
///
/// Returns `None` when the filename has no digit run, or when the chosen run
/// does not fit in u64 (a 20+-digit token is a content hash, not a counter).
fn sequence_index(name: &str) -> Option<u64> {
    // Strict comparison keeps the first run on length ties; max_by_key
    // would keep the last.
    let mut best: Option<&str> = None;
    for run in digit_runs(name) {
        if best.map_or(true, |b| run.len() > b.len()) {
            best = Some(run);
        }
    }
    best.and_then(|run| run.parse().ok())
}

/// Normalization template: every digit run collapsed to a `#` placeholder.
fn normalize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_ascii_digit() {
            if !in_run {
                out.push('#');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Evaluates one template group; phase two of the detection.
fn evaluate_group(template: &str, indices: &[u64]) -> Option<SequentialPattern> {
    let count = indices.len();
    if count < SEQUENCE_MIN_GROUP {
        return None;
    }

    // Continuity is judged on distinct indices; repeated downloads of the
    // same segment are one sample.
    let mut distinct: Vec<u64> = indices.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let gaps: Vec<u64> = distinct.windows(2).map(|w| w[1] - w[0]).collect();
    let is_continuous = gaps.iter().all(|gap| *gap <= SEQUENCE_MAX_GAP);
    if !is_continuous && count < SEQUENCE_LARGE_GROUP {
        return None;
    }

    let average_gap = if gaps.is_empty() {
        0.0
    } else {
        gaps.iter().sum::<u64>() as f64 / gaps.len() as f64
    };

    Some(SequentialPattern {
        template: template.to_string(),
        count,
        min_index: distinct[0],
        max_index: distinct[distinct.len() - 1],
        is_continuous,
        average_gap,
    })
}

/// Detects sequential filename patterns across a set of URLs.
///
/// Groups URLs by normalized filename template, then reports every group
/// that is continuous with at least three members, or that has at least ten
/// members regardless of continuity (very large families are strong evidence
/// even with samples missing from a partial capture).
///
/// Results are ordered by first appearance of the template in the input, so
/// "the first qualifying group" is deterministic for callers.
pub fn detect_sequences<'a, I>(urls: I) -> Vec<SequentialPattern>
where
    I: IntoIterator<Item = &'a str>,
{
    // Phase one: group membership. Template order is preserved so the output
    // is stable across runs.
    let mut order: Vec<String> = Vec::new();
    let mut groups: std::collections::HashMap<String, Vec<u64>> = std::collections::HashMap::new();

    for url in urls {
        let name = filename_of(url);
        let Some(index) = sequence_index(name) else {
            continue;
        };
        let template = normalize_filename(name);
        let indices = groups.entry(template.clone()).or_insert_with(|| {
            order.push(template.clone());
            Vec::new()
        });
        indices.push(index);
    }

    // Phase two: continuity, now that every member is known.
    order
        .iter()
        .filter_map(|template| evaluate_group(template, &groups[template]))
        .collect()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
