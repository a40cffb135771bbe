//! Fixed development header policy.
//!
//! Every response leaves the server with CORS wide open and caching fully
//! disabled, so the game and its test panel always load fresh files while
//! being iterated on.

use hyper::header::{HeaderName, HeaderValue};
use hyper::HeaderMap;

/// The six headers injected into every response, regardless of status
/// code or content type.
pub const DEV_HEADERS: [(&str, &str); 6] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
    ("cache-control", "no-cache, no-store, must-revalidate"),
    ("pragma", "no-cache"),
    ("expires", "0"),
];

/// Inject the development headers into a response header map.
///
/// Existing values under the same names are replaced, so the policy wins
/// over whatever the response builder set.
pub fn apply_dev_headers(headers: &mut HeaderMap) {
    for (name, value) in DEV_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
