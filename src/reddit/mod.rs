//! Discussion-source collector: searches ticker-relevant subreddits for
//! recent submissions mentioning the symbol.

mod api;
mod map;
mod session;
mod wire;

pub use map::communities_for;
pub use session::{RedditCredentials, RedditSession};

use crate::core::{
    MentionsClient,
    models::{Mention, MentionBatch},
};

/// Default per-subreddit result bound.
pub const DEFAULT_LIMIT: u32 = 25;

/// Fetches recent Reddit submissions mentioning `ticker` from the
/// subreddits mapped to it, bounded by `limit` per subreddit.
///
/// This is the best-effort convenience form: per-subreddit failures and a
/// missing session degrade to fewer (or zero) results, with diagnostics on
/// the `tracing` channel only. Use [`DiscussionMentionsBuilder`] to also
/// observe the absorbed failures.
pub async fn fetch_discussion_mentions(
    client: &MentionsClient,
    session: Option<&RedditSession>,
    ticker: &str,
    limit: u32,
) -> Vec<Mention> {
    DiscussionMentionsBuilder::new(client, session, ticker)
        .limit(limit)
        .fetch()
        .await
        .into_mentions()
}

/// A builder for collecting Reddit mentions of one ticker.
pub struct DiscussionMentionsBuilder {
    client: MentionsClient,
    session: Option<RedditSession>,
    ticker: String,
    limit: u32,
}

impl DiscussionMentionsBuilder {
    /// Creates a new builder for a given ticker.
    ///
    /// Pass `None` for the session to run in degraded mode: every fetch
    /// then returns an empty batch carrying a single warning.
    pub fn new(
        client: &MentionsClient,
        session: Option<&RedditSession>,
        ticker: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            session: session.cloned(),
            ticker: ticker.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Bounds the result count per searched subreddit. Default: 25.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Runs the search across the ticker's subreddits.
    ///
    /// Results follow subreddit-table order, then Reddit's own newest-first
    /// ordering within each subreddit. The same submission may appear once
    /// per subreddit it was found in; no cross-subreddit dedup is applied.
    pub async fn fetch(self) -> MentionBatch {
        api::fetch_mentions(
            &self.client,
            self.session.as_ref(),
            &self.ticker,
            self.limit,
        )
        .await
    }
}
