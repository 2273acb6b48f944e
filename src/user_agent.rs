//! Fixed User-Agent string for catalog requests.
//!
//! The publisher's site rejects default HTTP client identifiers, so every
//! request (index and set pages alike) presents itself as a desktop browser.

/// Browser User-Agent sent with every catalog request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) \
    AppleWebKit/537.36 (HTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";

/// Default User-Agent for catalog requests.
#[must_use]
pub(crate) fn default_catalog_user_agent() -> String {
    BROWSER_USER_AGENT.to_string()
}
