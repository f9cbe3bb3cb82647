use chrono::Utc;

use crate::core::{
    MentionsClient,
    models::{MentionBatch, MentionSource, SourceWarning},
};

use super::{FETCH_TIMEOUT, MAX_ITEMS, scrape};

pub(super) async fn fetch_mentions(client: &MentionsClient, ticker: &str) -> MentionBatch {
    let mut batch = MentionBatch::default();

    let url = match client.base_news().join(&format!("{ticker}/news")) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(%ticker, error = %e, "could not build news page URL");
            batch.warnings.push(SourceWarning {
                source: MentionSource::YahooFinance,
                scope: ticker.to_string(),
                message: e.to_string(),
            });
            return batch;
        }
    };

    tracing::info!(%ticker, %url, "fetching Yahoo Finance news");

    let resp = match client
        .http()
        .get(url.clone())
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%ticker, error = %e, "error fetching Yahoo Finance news");
            batch.warnings.push(SourceWarning {
                source: MentionSource::YahooFinance,
                scope: url.to_string(),
                message: e.to_string(),
            });
            return batch;
        }
    };

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        tracing::warn!(%ticker, status, "Yahoo Finance news returned an error status");
        batch.warnings.push(SourceWarning {
            source: MentionSource::YahooFinance,
            scope: url.to_string(),
            message: format!("unexpected response status: {status}"),
        });
        return batch;
    }

    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(%ticker, error = %e, "error reading Yahoo Finance news body");
            batch.warnings.push(SourceWarning {
                source: MentionSource::YahooFinance,
                scope: url.to_string(),
                message: e.to_string(),
            });
            return batch;
        }
    };

    // The listing page exposes no per-item timestamp; stamp collection time.
    batch.mentions = scrape::parse_listing(&body, ticker, &url, Utc::now());
    batch.mentions.truncate(MAX_ITEMS);

    tracing::info!(%ticker, count = batch.mentions.len(), "parsed Yahoo Finance headlines");
    batch
}
