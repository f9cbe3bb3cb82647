//! App-only OAuth2 handshake with the Reddit API.

use reqwest::header::USER_AGENT;
use serde::Deserialize;

use crate::core::{MentionsClient, MentionsError, client::REDDIT_USER_AGENT};

/// The credential triple for a Reddit "script" application.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    /// The application's client id.
    pub client_id: String,
    /// The application's client secret.
    pub client_secret: String,
    /// Descriptive User-Agent sent on every Reddit request. Reddit's API
    /// terms require an identifying agent string, not a browser UA.
    pub user_agent: String,
}

impl RedditCredentials {
    /// Assembles credentials from explicit values.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Reads `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET` and
    /// `REDDIT_USER_AGENT` from the environment.
    ///
    /// Returns `None` when the id or secret is absent; a missing user agent
    /// falls back to the crate default.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("REDDIT_CLIENT_ID").ok()?;
        let client_secret = std::env::var("REDDIT_CLIENT_SECRET").ok()?;
        let user_agent = std::env::var("REDDIT_USER_AGENT")
            .unwrap_or_else(|_| REDDIT_USER_AGENT.to_string());
        Some(Self {
            client_id,
            client_secret,
            user_agent,
        })
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// An established app-only session with the Reddit API.
///
/// Construct one up front with [`RedditSession::establish`] and pass it to
/// the discussion collector. If establishment fails, pass `None` instead:
/// the collector then degrades to returning empty results rather than
/// erroring on every call.
///
/// The session holds only the bearer token and is safe to clone and share
/// across concurrent fetches.
#[derive(Debug, Clone)]
pub struct RedditSession {
    token: String,
    user_agent: String,
}

impl RedditSession {
    /// Exchanges the credential pair for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`MentionsError::Status`] when the token endpoint answers
    /// with a non-2xx status, [`MentionsError::Auth`] when the response
    /// carries no usable token, and [`MentionsError::Http`] on transport
    /// failures.
    pub async fn establish(
        client: &MentionsClient,
        creds: &RedditCredentials,
    ) -> Result<Self, MentionsError> {
        let url = client.base_reddit_auth().join("api/v1/access_token")?;

        let resp = client
            .http()
            .post(url.clone())
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .header(USER_AGENT, &creds.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(MentionsError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body: TokenResponse = serde_json::from_str(&resp.text().await?)?;
        let token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| MentionsError::Auth("token endpoint returned no access_token".into()))?;

        tracing::info!("established Reddit API session");

        Ok(Self {
            token,
            user_agent: creds.user_agent.clone(),
        })
    }

    pub(crate) fn bearer(&self) -> &str {
        &self.token
    }

    pub(crate) fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
