//! Static ticker → subreddit routing table.

/// Fallback pair for tickers without a dedicated entry.
pub(crate) const DEFAULT_COMMUNITIES: &[&str] = &["stocks", "CryptoCurrency"];

/// The subreddits searched for a ticker, in search order.
///
/// Lookup is case-insensitive on the ticker; unknown tickers fall back to
/// the general-purpose pair.
#[must_use]
pub fn communities_for(ticker: &str) -> &'static [&'static str] {
    match ticker.to_ascii_uppercase().as_str() {
        "AAPL" => &["apple", "stocks", "investing"],
        "GOOGL" => &["google", "stocks", "investing"],
        "TSLA" => &["teslamotors", "stocks", "investing"],
        "BTC" => &["Bitcoin", "CryptoCurrency"],
        "ETH" => &["ethereum", "CryptoCurrency"],
        _ => DEFAULT_COMMUNITIES,
    }
}
