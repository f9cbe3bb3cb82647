//! News-page collector: scrapes headline entries from a ticker's Yahoo
//! Finance news listing page.

mod api;
mod scrape;

use std::time::Duration;

use crate::core::{
    MentionsClient,
    models::{Mention, MentionBatch},
};

/// Cap on headlines returned per page fetch.
pub const MAX_ITEMS: usize = 10;

/// Hard bound on the listing page request.
pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Scrapes up to [`MAX_ITEMS`] news headlines mentioning `ticker`.
///
/// Best-effort convenience form: a failed or non-2xx page fetch degrades to
/// an empty result, with diagnostics on the `tracing` channel only. Use
/// [`NewsMentionsBuilder`] to also observe the absorbed failures.
pub async fn fetch_news_mentions(client: &MentionsClient, ticker: &str) -> Vec<Mention> {
    NewsMentionsBuilder::new(client, ticker)
        .fetch()
        .await
        .into_mentions()
}

/// A builder for collecting news headlines for one ticker.
pub struct NewsMentionsBuilder {
    client: MentionsClient,
    ticker: String,
}

impl NewsMentionsBuilder {
    /// Creates a new builder for a given ticker. The ticker is interpolated
    /// verbatim into the listing page URL.
    pub fn new(client: &MentionsClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
        }
    }

    /// Fetches and scans the listing page.
    ///
    /// The whole page is scanned in document order; the result is truncated
    /// to [`MAX_ITEMS`] entries.
    pub async fn fetch(self) -> MentionBatch {
        api::fetch_mentions(&self.client, &self.ticker).await
    }
}
