//! Network constants and URL construction for the poe.ninja API.

use crate::shared::{Endpoint, League};

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://poe.ninja/api/data";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("poe-ninja-sdk/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Build `{base}/{endpoint}?league=..&type=..[&{id_key}={id}]`.
///
/// `category` is a catalog literal and goes in verbatim; the league is encoded.
pub fn endpoint_url(
    base_url: &str,
    endpoint: Endpoint,
    league: &League,
    category: &str,
    id: Option<(&str, i64)>,
) -> String {
    let mut url = format!(
        "{}/{}?league={}&type={}",
        base_url.trim_end_matches('/'),
        endpoint,
        urlencoding::encode(league.as_str()),
        category
    );
    if let Some((key, value)) = id {
        url = format!("{}&{}={}", url, key, value);
    }
    url
}
