use chrono::DateTime;
use reqwest::header::USER_AGENT;

use crate::core::{
    MentionsClient, MentionsError,
    models::{Mention, MentionBatch, MentionSource, SourceWarning},
};

use super::{map, session::RedditSession, wire};

pub(super) async fn fetch_mentions(
    client: &MentionsClient,
    session: Option<&RedditSession>,
    ticker: &str,
    limit: u32,
) -> MentionBatch {
    let mut batch = MentionBatch::default();

    let Some(session) = session else {
        tracing::warn!(%ticker, "Reddit session not available, skipping fetch");
        batch.warnings.push(SourceWarning {
            source: MentionSource::Reddit,
            scope: ticker.to_string(),
            message: "Reddit session not available".into(),
        });
        return batch;
    };

    let communities = map::communities_for(ticker);
    tracing::info!(%ticker, ?communities, "searching Reddit");

    for sub in communities {
        match search_community(client, session, sub, ticker, limit).await {
            Ok(mut mentions) => batch.mentions.append(&mut mentions),
            Err(e) => {
                tracing::warn!(subreddit = %sub, error = %e, "could not fetch from subreddit");
                batch.warnings.push(SourceWarning {
                    source: MentionSource::Reddit,
                    scope: (*sub).to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(%ticker, count = batch.mentions.len(), "Reddit search complete");
    batch
}

/// Searches one subreddit for recent submissions whose title contains the
/// ticker as a literal phrase, newest first, scoped to the past week.
async fn search_community(
    client: &MentionsClient,
    session: &RedditSession,
    community: &str,
    ticker: &str,
    limit: u32,
) -> Result<Vec<Mention>, MentionsError> {
    let mut url = client
        .base_reddit_api()
        .join(&format!("r/{community}/search"))?;
    url.query_pairs_mut()
        .append_pair("q", &format!("title:\"{ticker}\""))
        .append_pair("restrict_sr", "on")
        .append_pair("sort", "new")
        .append_pair("t", "week")
        .append_pair("limit", &limit.to_string())
        .append_pair("raw_json", "1");

    let resp = client
        .http()
        .get(url.clone())
        .bearer_auth(session.bearer())
        .header(USER_AGENT, session.user_agent())
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(MentionsError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let listing: wire::Listing = serde_json::from_str(&resp.text().await?)?;
    let children = listing
        .data
        .and_then(|d| d.children)
        .unwrap_or_default();

    Ok(children
        .into_iter()
        .filter_map(|child| submission_to_mention(child.data?, ticker))
        .collect())
}

fn submission_to_mention(post: wire::Submission, ticker: &str) -> Option<Mention> {
    let title = post.title.filter(|t| !t.is_empty())?;
    let url = post.url.filter(|u| !u.is_empty())?;
    let created_utc = DateTime::from_timestamp(post.created_utc? as i64, 0)?;

    Some(Mention {
        source: MentionSource::Reddit,
        ticker: ticker.to_string(),
        title,
        text: post.selftext.unwrap_or_default(),
        url,
        created_utc,
    })
}
