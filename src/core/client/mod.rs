//! Public client surface + builder.

mod constants;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::error::MentionsError;
use constants::{
    DEFAULT_BASE_NEWS, DEFAULT_BASE_REDDIT_API, DEFAULT_BASE_REDDIT_AUTH, USER_AGENT,
};

pub(crate) use constants::REDDIT_USER_AGENT;

/// Shared HTTP client and endpoint configuration for both collectors.
///
/// Cloning is cheap (the inner `reqwest::Client` is reference-counted), and
/// a clone can be used freely from concurrently running tasks; the client
/// holds no mutable state.
#[derive(Debug, Clone)]
pub struct MentionsClient {
    http: Client,
    base_reddit_auth: Url,
    base_reddit_api: Url,
    base_news: Url,
}

impl Default for MentionsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl MentionsClient {
    /// Create a new builder.
    pub fn builder() -> MentionsClientBuilder {
        MentionsClientBuilder::default()
    }

    /* -------- internal getters used by the collector modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_reddit_auth(&self) -> &Url {
        &self.base_reddit_auth
    }
    pub(crate) fn base_reddit_api(&self) -> &Url {
        &self.base_reddit_api
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`MentionsClient`].
#[derive(Default)]
pub struct MentionsClientBuilder {
    user_agent: Option<String>,
    base_reddit_auth: Option<Url>,
    base_reddit_api: Option<Url>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MentionsClientBuilder {
    /// Override the browser-like User-Agent used for page fetches.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Reddit www base used for the token handshake
    /// (e.g. `https://www.reddit.com/`).
    #[must_use]
    pub fn base_reddit_auth(mut self, url: Url) -> Self {
        self.base_reddit_auth = Some(url);
        self
    }

    /// Override the Reddit OAuth API base (e.g. `https://oauth.reddit.com/`).
    #[must_use]
    pub fn base_reddit_api(mut self, url: Url) -> Self {
        self.base_reddit_api = Some(url);
        self
    }

    /// Override the news listing base (e.g. `https://finance.yahoo.com/quote/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none; the news
    /// fetch additionally carries its own fixed per-request bound.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<MentionsClient, MentionsError> {
        let base_reddit_auth = self
            .base_reddit_auth
            .unwrap_or(Url::parse(DEFAULT_BASE_REDDIT_AUTH)?);
        let base_reddit_api = self
            .base_reddit_api
            .unwrap_or(Url::parse(DEFAULT_BASE_REDDIT_API)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);

        let mut httpb = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MentionsClient {
            http,
            base_reddit_auth,
            base_reddit_api,
            base_news,
        })
    }
}
