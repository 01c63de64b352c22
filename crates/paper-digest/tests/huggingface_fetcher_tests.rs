//! Hugging Face daily-papers fetcher tests against a mocked feed.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paper_digest::HuggingFaceFetcher;

fn daily_feed() -> serde_json::Value {
    json!([
        {
            "paper": {
                "id": "2405.11111",
                "title": "Upvoted RAG Study",
                "summary": "Retrieval augmented generation, measured.",
                "authors": [{"name": "Carol"}],
                "publishedAt": "2024-05-20T00:00:00Z",
                "upvotes": 120
            }
        },
        {
            "paper": {
                "id": "weekly-roundup",
                "title": "Not A Paper",
                "upvotes": 999
            }
        },
        {
            "id": "2405.22222",
            "title": "Inline Diffusion Result",
            "summary": "Diffusion models, again.",
            "upvotes": 40
        }
    ])
}

#[tokio::test]
async fn test_fetch_skips_non_arxiv_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/daily_papers"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(daily_feed()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HuggingFaceFetcher::new(50).with_base_url(mock_server.uri());
    let papers = fetcher.fetch_papers(None).await;

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].arxiv_id, "2405.11111");
    assert_eq!(papers[0].citation_count, Some(120));
    assert_eq!(papers[0].url, "https://huggingface.co/papers/2405.11111");
    assert_eq!(papers[1].arxiv_id, "2405.22222");
}

#[tokio::test]
async fn test_keyword_filter_narrows_the_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(daily_feed()))
        .mount(&mock_server)
        .await;

    let fetcher = HuggingFaceFetcher::new(50).with_base_url(mock_server.uri());
    let papers = fetcher.fetch_papers(Some("RAG")).await;

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "Upvoted RAG Study");
}

#[tokio::test]
async fn test_server_error_yields_empty_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let fetcher = HuggingFaceFetcher::new(50).with_base_url(mock_server.uri());
    assert!(fetcher.fetch_papers(None).await.is_empty());
}

#[tokio::test]
async fn test_transport_error_yields_empty_set() {
    let fetcher = HuggingFaceFetcher::new(50).with_base_url("http://127.0.0.1:1");
    assert!(fetcher.fetch_papers(None).await.is_empty());
}
