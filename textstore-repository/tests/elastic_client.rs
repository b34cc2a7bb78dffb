//! HTTP-level tests for the search index client.
//!
//! These tests use wiremock to simulate the search index service, covering
//! the index lifecycle check, the backend capability operations, and the
//! paged fuzzy search mapping.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use textstore_repository::{
    DateRangeFilter, ElasticClient, ElasticConfig, QueryTemplates, Repository, RepositoryError,
};
use textstore_shared::{PageRequest, RawTextDocument};

fn mock_config(server: &MockServer) -> ElasticConfig {
    let address = server.address();
    ElasticConfig::new(address.ip().to_string(), address.port())
        .with_request_timeout(Duration::from_secs(2))
}

/// Mount a probe response reporting that the index already exists.
async fn mount_existing_index(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rawtext"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rawtext": {}})))
        .mount(server)
        .await;
}

async fn client(server: &MockServer) -> ElasticClient<RawTextDocument> {
    ElasticClient::new(&mock_config(server), QueryTemplates::raw_text())
        .await
        .unwrap()
}

#[tokio::test]
async fn existing_index_is_not_recreated() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("PUT"))
        .and(path("/rawtext"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    client(&server).await;
}

#[tokio::test]
async fn missing_index_is_created_from_the_template() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rawtext"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/rawtext"))
        .and(body_string_contains("textContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).await;
}

#[tokio::test]
async fn transient_probe_failure_does_not_block_construction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rawtext"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    // Construction succeeds despite the failed probe.
    let client = client(&server).await;

    // Once the backend recovers, operations work without re-construction.
    Mock::given(method("PUT"))
        .and(path("/rawtext/_doc/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "created"})))
        .mount(&server)
        .await;

    let saved = client
        .save(RawTextDocument::new("abc", "recovered"))
        .await
        .unwrap();
    assert_eq!(saved.id.as_deref(), Some("abc"));
}

#[tokio::test]
async fn save_puts_the_document_and_returns_the_input() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("PUT"))
        .and(path("/rawtext/_doc/abc123"))
        .and(body_string_contains("some text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "created"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let input = RawTextDocument::new("abc123", "some text");

    let saved = client.save(input.clone()).await.unwrap();

    // Trust the write: the input comes back unchanged, no read-back.
    assert_eq!(saved, input);
}

#[tokio::test]
async fn save_surfaces_backend_status_on_failure() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("PUT"))
        .and(path("/rawtext/_doc/abc123"))
        .respond_with(ResponseTemplate::new(500).set_body_string("shard failure"))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let result = client.save(RawTextDocument::new("abc123", "text")).await;

    match result {
        Err(RepositoryError::Backend {
            operation, status, ..
        }) => {
            assert_eq!(operation, "save");
            assert_eq!(status, 500);
        }
        other => panic!("expected backend error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn find_by_id_returns_the_first_hit_source() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("POST"))
        .and(path("/rawtext/_search"))
        .and(body_string_contains("abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {
                "total": {"value": 1},
                "hits": [
                    {"_source": {"id": "abc123", "textContent": "found text"}}
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let found = client.find_by_id("abc123").await.unwrap();

    let doc = found.expect("expected a document");
    assert_eq!(doc.id.as_deref(), Some("abc123"));
    assert_eq!(doc.text_content.as_deref(), Some("found text"));
}

#[tokio::test]
async fn find_by_id_with_no_hits_is_none_not_an_error() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("POST"))
        .and(path("/rawtext/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"total": {"value": 0}, "hits": []}
        })))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let found = client.find_by_id("never-created").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn delete_of_missing_document_is_a_no_op() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/rawtext/_doc/never-created"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"result": "not_found"})))
        .mount(&server)
        .await;

    let client = client(&server).await;
    client.delete_by_id("never-created").await.unwrap();
}

#[tokio::test]
async fn delete_surfaces_non_404_failures() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/rawtext/_doc/abc123"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let result = client.delete_by_id("abc123").await;

    assert!(matches!(
        result,
        Err(RepositoryError::Backend { status: 500, .. })
    ));
}

#[tokio::test]
async fn search_page_preserves_order_totals_and_highlights() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    // 25 matches in the corpus, page 0 of size 10; the service answers with
    // ten hits in relevance order.
    let hits: Vec<_> = (0..10)
        .map(|i| {
            json!({
                "_source": {"id": format!("doc-{i}"), "textContent": format!("match {i}")},
                "highlight": {"textContent": [format!("<em>match</em> {i}")]}
            })
        })
        .collect();

    Mock::given(method("POST"))
        .and(path("/rawtext/_search"))
        .and(body_string_contains("\"from\": 0"))
        .and(body_string_contains("needle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"total": {"value": 25}, "hits": hits}
        })))
        .mount(&server)
        .await;

    let client = client(&server).await;
    let page = client
        .search_page("needle", &DateRangeFilter::default(), PageRequest::new(0, 10))
        .await
        .unwrap();

    assert_eq!(page.total_matches, 25);
    assert_eq!(page.len(), 10);
    assert_eq!(page.total_pages(), 3);
    for (i, item) in page.items.iter().enumerate() {
        assert_eq!(item.source.id.as_deref(), Some(format!("doc-{i}").as_str()));
        assert_eq!(item.highlights, vec![format!("<em>match</em> {i}")]);
    }
}

#[tokio::test]
async fn empty_search_string_fails_before_any_network_call() {
    let server = MockServer::start().await;
    mount_existing_index(&server).await;

    Mock::given(method("POST"))
        .and(path("/rawtext/_search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let result = client
        .search_page("", &DateRangeFilter::default(), PageRequest::new(0, 10))
        .await;

    assert!(matches!(result, Err(RepositoryError::InvalidQuery(_))));
}
