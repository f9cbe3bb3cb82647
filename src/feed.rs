use crate::core::{MentionsClient, models::MentionBatch};
use crate::news::NewsMentionsBuilder;
use crate::reddit::{DEFAULT_LIMIT, DiscussionMentionsBuilder, RedditSession};

/// A high-level interface for one ticker, running either collector or both
/// and merging their results.
///
/// Both sources produce the same record shape, so a merged batch is just
/// the concatenation of the two; nothing flows between the collectors.
///
/// # Example
///
/// ```no_run
/// # use ticker_mentions::{MentionFeed, MentionsClient};
/// # #[tokio::main]
/// # async fn main() {
/// let client = MentionsClient::default();
/// let batch = MentionFeed::new(&client, "AAPL").all().await;
/// println!("{} mentions", batch.mentions.len());
/// # }
/// ```
pub struct MentionFeed {
    client: MentionsClient,
    session: Option<RedditSession>,
    ticker: String,
    limit: u32,
}

impl MentionFeed {
    /// Creates a feed for a given ticker. Without a session attached, the
    /// discussion side runs degraded and contributes only a warning.
    pub fn new(client: &MentionsClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            session: None,
            ticker: ticker.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Attaches an established Reddit session.
    #[must_use]
    pub fn session(mut self, session: &RedditSession) -> Self {
        self.session = Some(session.clone());
        self
    }

    /// Bounds the discussion result count per searched subreddit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Collects mentions from the discussion platform only.
    pub async fn discussion(&self) -> MentionBatch {
        DiscussionMentionsBuilder::new(&self.client, self.session.as_ref(), &self.ticker)
            .limit(self.limit)
            .fetch()
            .await
    }

    /// Collects mentions from the news site only.
    pub async fn news(&self) -> MentionBatch {
        NewsMentionsBuilder::new(&self.client, &self.ticker)
            .fetch()
            .await
    }

    /// Runs both collectors sequentially and merges their batches,
    /// discussion first. No cross-source dedup is applied.
    pub async fn all(&self) -> MentionBatch {
        let mut batch = self.discussion().await;
        batch.merge(self.news().await);
        batch
    }
}
