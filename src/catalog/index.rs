//! Set index parsing: the collector-centre page lists one link per set.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

/// Default catalog index URL.
pub const DEFAULT_INDEX_URL: &str = "https://fabtcg.com/collectors-centre/";

#[allow(clippy::expect_used)]
static ITEM_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".item-link").expect("item-link selector is valid")); // Static pattern, safe to panic

/// A set page discovered on the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLink {
    /// Visible link text, trimmed.
    pub display_text: String,
    /// Absolute URL of the set page.
    pub url: String,
}

impl SetLink {
    /// Creates a set link.
    #[must_use]
    pub fn new(display_text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            url: url.into(),
        }
    }
}

/// Extracts set links from the index page.
///
/// Selects every `.item-link` element and pairs its trimmed text with its
/// `href`. Relative hrefs are resolved against `base_url`. Links without an
/// `href`, or whose href cannot be resolved, are skipped with a warning.
#[must_use]
pub fn parse_set_index(document_html: &str, base_url: &str) -> Vec<SetLink> {
    let document = Html::parse_document(document_html);
    let base = Url::parse(base_url).ok();

    let links: Vec<SetLink> = document
        .select(&ITEM_LINK)
        .filter_map(|element| {
            let display_text = element.text().collect::<String>().trim().to_string();
            let Some(href) = element.value().attr("href") else {
                warn!(text = %display_text, "set link has no href; skipping");
                return None;
            };

            let resolved = match &base {
                Some(base) => base.join(href).map(String::from),
                None => Url::parse(href).map(String::from),
            };
            match resolved {
                Ok(url) => Some(SetLink::new(display_text, url)),
                Err(error) => {
                    warn!(href, error = %error, "set link href is not a valid URL; skipping");
                    None
                }
            }
        })
        .collect();

    debug!(count = links.len(), "parsed set index");
    links
}
