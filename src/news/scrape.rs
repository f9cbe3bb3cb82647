//! Defensive extraction of headline entries from the news listing markup.
//!
//! Partial or malformed stream items are common on the listing page; each
//! item is validated independently and skipped on failure, so a bad
//! fragment never aborts the scan.

use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use url::Url;

use crate::core::models::{Mention, MentionSource};

/// Scans the whole page for stream items and maps the qualifying ones to
/// mentions, in document order.
///
/// A qualifying item is an `li.js-stream-content` element containing both a
/// link and an `h3` heading with non-empty text. Relative hrefs are
/// resolved against `page_url`; absolute hrefs pass through unchanged.
pub(super) fn parse_listing(
    html: &str,
    ticker: &str,
    page_url: &Url,
    observed: DateTime<Utc>,
) -> Vec<Mention> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse("li.js-stream-content").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();
    let heading_selector = Selector::parse("h3").unwrap();

    let mut mentions = Vec::new();
    for item in document.select(&item_selector) {
        let Some(link) = item.select(&link_selector).next() else {
            continue;
        };
        let Some(heading) = item.select(&heading_selector).next() else {
            continue;
        };

        let title = heading.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let href = link.value().attr("href").unwrap_or_default();
        let Ok(url) = page_url.join(href) else {
            continue;
        };

        mentions.push(Mention {
            source: MentionSource::YahooFinance,
            ticker: ticker.to_string(),
            title,
            text: String::new(),
            url: url.to_string(),
            created_utc: observed,
        });
    }

    mentions
}
