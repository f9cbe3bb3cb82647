use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a mention was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MentionSource {
    /// A Reddit submission whose title contains the ticker.
    Reddit,
    /// A headline from the ticker's Yahoo Finance news listing page.
    #[serde(rename = "Yahoo Finance")]
    YahooFinance,
}

impl std::fmt::Display for MentionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reddit => f.write_str("Reddit"),
            Self::YahooFinance => f.write_str("Yahoo Finance"),
        }
    }
}

/// One normalized record of a ticker appearing in a social post or news
/// headline.
///
/// `title` and `url` are always non-empty; source entries that lack either
/// are dropped during collection rather than emitted as placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    /// The platform the mention was collected from.
    pub source: MentionSource,
    /// The queried symbol, exactly as the caller requested it.
    pub ticker: String,
    /// Headline or post title text.
    pub title: String,
    /// Post body text. Always empty for news headlines, which expose no
    /// body on the listing page.
    pub text: String,
    /// Absolute, resolved URL of the post or article.
    pub url: String,
    /// Post creation time for Reddit entries. News listing pages carry no
    /// per-item timestamp, so news entries are stamped with the collection
    /// time instead.
    pub created_utc: DateTime<Utc>,
}

/// A per-source failure that was absorbed rather than propagated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceWarning {
    /// The collector that hit the failure.
    pub source: MentionSource,
    /// The unit that failed: a subreddit name, or the news page URL.
    pub scope: String,
    /// Human-readable description of the failure.
    pub message: String,
}

/// The full result of one collector call: the mentions that were gathered,
/// plus a warning for every source-level unit that failed along the way.
///
/// An empty `mentions` with empty `warnings` is a true zero-mention result;
/// with warnings present, some or all of the source was unreachable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MentionBatch {
    /// Collected mentions, in source order.
    pub mentions: Vec<Mention>,
    /// One entry per absorbed per-source failure.
    pub warnings: Vec<SourceWarning>,
}

impl MentionBatch {
    /// Appends another batch, preserving the order of both.
    pub fn merge(&mut self, other: Self) {
        self.mentions.extend(other.mentions);
        self.warnings.extend(other.warnings);
    }

    /// Discards the warnings and returns just the mentions.
    ///
    /// This is the best-effort view: callers cannot distinguish "no
    /// mentions" from "every source failed". Warnings have already been
    /// logged when the batch was built.
    #[must_use]
    pub fn into_mentions(self) -> Vec<Mention> {
        self.mentions
    }
}
