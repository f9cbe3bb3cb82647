use chrono::Utc;
use httpmock::{Method::GET, MockServer};
use ticker_mentions::{MentionSource, NewsMentionsBuilder, fetch_news_mentions};
use url::Url;

use crate::common;

#[tokio::test]
async fn scrapes_headlines_and_resolves_relative_urls() {
    let server = MockServer::start();
    let client = common::news_client(&server);

    let items = format!(
        "{}{}",
        common::stream_item("/news/apple-beats-estimates", "Apple beats estimates"),
        common::stream_item(
            "https://www.reuters.com/technology/apple-story",
            "Reuters on Apple"
        )
    );
    let mock = server.mock(|when, then| {
        when.method(GET).path("/quote/AAPL/news");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::news_page(&items));
    });

    let before = Utc::now();
    let mentions = fetch_news_mentions(&client, "AAPL").await;
    let after = Utc::now();

    mock.assert();
    assert_eq!(mentions.len(), 2);

    let first = &mentions[0];
    assert_eq!(first.source, MentionSource::YahooFinance);
    assert_eq!(first.ticker, "AAPL");
    assert_eq!(first.title, "Apple beats estimates");
    assert_eq!(first.text, "");
    assert_eq!(
        first.url,
        format!("{}/news/apple-beats-estimates", server.base_url())
    );
    // No per-item timestamp on the page: stamped with collection time.
    assert!(first.created_utc >= before && first.created_utc <= after);

    assert_eq!(mentions[1].url, "https://www.reuters.com/technology/apple-story");
}

#[tokio::test]
async fn output_is_capped_at_ten_in_page_order() {
    let server = MockServer::start();
    let client = common::news_client(&server);

    let items: String = (0..14)
        .map(|i| common::stream_item(&format!("/news/{i}"), &format!("Headline {i}")))
        .collect();
    server.mock(|when, then| {
        when.method(GET).path("/quote/AAPL/news");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::news_page(&items));
    });

    let mentions = fetch_news_mentions(&client, "AAPL").await;

    assert_eq!(mentions.len(), 10);
    for (i, mention) in mentions.iter().enumerate() {
        assert_eq!(mention.title, format!("Headline {i}"));
    }
}

#[tokio::test]
async fn http_404_yields_empty_with_a_warning() {
    let server = MockServer::start();
    let client = common::news_client(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/quote/ZZZZ/news");
        then.status(404).body("Not Found");
    });

    let mentions = fetch_news_mentions(&client, "ZZZZ").await;
    mock.assert();
    assert!(mentions.is_empty());

    // The builder form surfaces what the convenience form absorbs.
    let batch = NewsMentionsBuilder::new(&client, "ZZZZ").fetch().await;
    assert!(batch.mentions.is_empty());
    assert_eq!(batch.warnings.len(), 1);
    assert_eq!(batch.warnings[0].source, MentionSource::YahooFinance);
    assert!(batch.warnings[0].scope.contains("/quote/ZZZZ/news"));
    assert!(batch.warnings[0].message.contains("404"));
}

#[tokio::test]
async fn items_missing_their_heading_are_skipped() {
    let server = MockServer::start();
    let client = common::news_client(&server);

    let items = format!(
        r#"{}<li class="js-stream-content"><a href="/news/headless">no heading</a></li>"#,
        common::stream_item("/news/well-formed", "The well-formed item")
    );
    server.mock(|when, then| {
        when.method(GET).path("/quote/AAPL/news");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::news_page(&items));
    });

    let mentions = fetch_news_mentions(&client, "AAPL").await;

    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].title, "The well-formed item");
}

#[tokio::test]
async fn browser_like_user_agent_is_sent() {
    let server = MockServer::start();
    let client = ticker_mentions::MentionsClient::builder()
        .base_news(Url::parse(&format!("{}/quote/", server.base_url())).unwrap())
        .user_agent("test-browser/1.0")
        .build()
        .unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/quote/AAPL/news")
            .header("user-agent", "test-browser/1.0");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::news_page(""));
    });

    let mentions = fetch_news_mentions(&client, "AAPL").await;
    mock.assert();
    assert!(mentions.is_empty());
}
