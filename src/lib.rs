//! ticker-mentions: collects Reddit and Yahoo Finance mentions of stock
//! and crypto tickers, normalized into one record shape for downstream
//! sentiment analysis.
//!
//! The two collectors are independent and best-effort: a source that fails
//! contributes a [`SourceWarning`] (and a log line) instead of an error.
//!
//! # Example
//!
//! ```no_run
//! use ticker_mentions::{MentionFeed, MentionsClient, RedditCredentials, RedditSession};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MentionsClient::default();
//!
//! // A failed handshake degrades to news-only collection.
//! let session = match RedditCredentials::from_env() {
//!     Some(creds) => RedditSession::establish(&client, &creds).await.ok(),
//!     None => None,
//! };
//!
//! let mut feed = MentionFeed::new(&client, "AAPL");
//! if let Some(s) = &session {
//!     feed = feed.session(s);
//! }
//!
//! let batch = feed.all().await;
//! println!("{} mentions, {} warnings", batch.mentions.len(), batch.warnings.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
mod feed;
pub mod news;
pub mod reddit;

pub use crate::core::{Mention, MentionBatch, MentionSource, SourceWarning};
pub use crate::core::{MentionsClient, MentionsClientBuilder, MentionsError};
pub use feed::MentionFeed;
pub use news::{NewsMentionsBuilder, fetch_news_mentions};
pub use reddit::{
    DiscussionMentionsBuilder, RedditCredentials, RedditSession, fetch_discussion_mentions,
};
