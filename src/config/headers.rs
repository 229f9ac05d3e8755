//! CDN/proxy response-header constants.
//!
//! Response headers that identify the serving infrastructure. Observations
//! are recorded under the mapped label whenever one of these headers appears
//! in a captured response.

// CDN/Proxy identification
/// Cloudflare request id header
pub const HEADER_CF_RAY: &str = "cf-ray";
/// Cloudflare cache status header
pub const HEADER_CF_CACHE_STATUS: &str = "cf-cache-status";
/// CloudFront request id header
pub const HEADER_X_AMZ_CF_ID: &str = "x-amz-cf-id";
/// CloudFront point-of-presence header
pub const HEADER_X_AMZ_CF_POP: &str = "x-amz-cf-pop";
/// Akamai request id header
pub const HEADER_X_AKAMAI_REQUEST_ID: &str = "x-akamai-request-id";
/// Fastly/Varnish cache node header
pub const HEADER_X_SERVED_BY: &str = "x-served-by";
/// Generic CDN identification header
pub const HEADER_X_CDN: &str = "x-cdn";
/// Proxy/CDN hop header
pub const HEADER_VIA: &str = "via";
/// Server software header
pub const HEADER_SERVER: &str = "server";
/// Huawei CDN header
pub const HEADER_X_HW: &str = "x-hw";
/// OpenStack Swift storage header
pub const HEADER_X_SWIFT: &str = "x-swift";
/// Generic CDN cache status header
pub const HEADER_X_CACHE: &str = "x-cache";

/// Ordered table of CDN/proxy response headers and the infrastructure label
/// each one is recorded under. Header names are lower-case because response
/// header maps are lower-cased at parse time.
pub const CDN_RESPONSE_HEADERS: &[(&str, &str)] = &[
    (HEADER_CF_RAY, "Cloudflare"),
    (HEADER_CF_CACHE_STATUS, "Cloudflare"),
    (HEADER_X_AMZ_CF_ID, "CloudFront"),
    (HEADER_X_AMZ_CF_POP, "CloudFront"),
    (HEADER_X_AKAMAI_REQUEST_ID, "Akamai"),
    (HEADER_X_SERVED_BY, "Fastly/Varnish"),
    (HEADER_X_CDN, "CDN"),
    (HEADER_VIA, "Proxy/CDN"),
    (HEADER_SERVER, "Server"),
    (HEADER_X_HW, "Huawei CDN"),
    (HEADER_X_SWIFT, "OpenStack Swift"),
    (HEADER_X_CACHE, "CDN Cache"),
];

/// Referer request header, used to attribute the player page of a playlist.
pub const HEADER_REFERER: &str = "referer";
