//! Host extraction from captured URLs.
//!
//! Evidence is attributed per host (the URL's authority component), not per
//! registrable domain: a capture that pulls segments from `cdn3.example.com`
//! should name that host, not `example.com`.

use url::Url;

/// Extracts the host component from a URL.
///
/// Total over arbitrary input: any URL that cannot be parsed, or that has no
/// host component, yields an empty string. The entry is still counted toward
/// the request total by the caller; it is only excluded from host-keyed
/// attribution.
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
pub fn extract_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
