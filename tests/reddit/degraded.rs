use httpmock::{Method::POST, MockServer};
use ticker_mentions::{
    DiscussionMentionsBuilder, MentionSource, MentionsError, RedditSession,
    fetch_discussion_mentions,
};

use crate::common;

#[tokio::test]
async fn failed_token_handshake_returns_status_error() {
    let server = MockServer::start();
    let client = common::reddit_client(&server);

    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/access_token");
        then.status(401).body("Unauthorized");
    });

    let err = RedditSession::establish(&client, &common::credentials())
        .await
        .unwrap_err();
    token_mock.assert();

    match err {
        MentionsError::Status { status, url } => {
            assert_eq!(status, 401);
            assert!(url.contains("/api/v1/access_token"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn token_response_without_token_is_an_auth_error() {
    let server = MockServer::start();
    let client = common::reddit_client(&server);

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/access_token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"error": "invalid_grant"}"#);
    });

    let err = RedditSession::establish(&client, &common::credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, MentionsError::Auth(_)));
}

#[tokio::test]
async fn missing_session_yields_empty_results_without_panicking() {
    let server = MockServer::start();
    let client = common::reddit_client(&server);

    // No mocks mounted: a degraded fetch must not touch the network.
    for ticker in ["AAPL", "BTC"] {
        let mentions = fetch_discussion_mentions(&client, None, ticker, 25).await;
        assert!(mentions.is_empty());
    }
}

#[tokio::test]
async fn degraded_batch_carries_one_warning() {
    let server = MockServer::start();
    let client = common::reddit_client(&server);

    let batch = DiscussionMentionsBuilder::new(&client, None, "AAPL")
        .fetch()
        .await;

    assert!(batch.mentions.is_empty());
    assert_eq!(batch.warnings.len(), 1);
    assert_eq!(batch.warnings[0].source, MentionSource::Reddit);
    assert_eq!(batch.warnings[0].scope, "AAPL");
}
