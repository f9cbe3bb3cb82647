//! Centralized constants for default endpoints and UA strings.

/// Default desktop UA. Yahoo serves an interstitial to non-browser agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Descriptive UA sent on Reddit API requests when the credentials do not
/// supply one. Reddit rejects generic browser agents on its OAuth API.
pub(crate) const REDDIT_USER_AGENT: &str =
    concat!("ticker-mentions/", env!("CARGO_PKG_VERSION"));

/// Reddit www base, used for the OAuth token handshake.
pub(crate) const DEFAULT_BASE_REDDIT_AUTH: &str = "https://www.reddit.com/";

/// Reddit OAuth API base (search requests go through here).
pub(crate) const DEFAULT_BASE_REDDIT_API: &str = "https://oauth.reddit.com/";

/// Yahoo Finance quote page base; `<SYMBOL>/news` is appended for the
/// per-ticker news listing page.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://finance.yahoo.com/quote/";
