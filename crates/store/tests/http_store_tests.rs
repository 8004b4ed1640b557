//! Integration tests for the HTTP graph store against a fake SPARQL endpoint

mod common;

use axum::http::StatusCode;
use common::{FakeSparqlEndpoint, Reply};
use std::time::Duration;
use unisearch_core::config::GraphStoreConfig;
use unisearch_core::{validate_university_search, RawUniversitySearch};
use unisearch_query::{compile_university_query, CompiledQuery};
use unisearch_store::{ExecutorError, ExecutorErrorKind, GraphStore, HttpGraphStore};

fn config(endpoint: String, retry_attempts: usize) -> GraphStoreConfig {
    GraphStoreConfig {
        endpoint,
        timeout_secs: 1,
        retry_attempts,
        retry_backoff_ms: 1,
    }
}

fn query() -> CompiledQuery {
    let criteria = validate_university_search(&RawUniversitySearch {
        course: Some("Engenharia Informática".into()),
        district: Some("Lisboa".into()),
        grade: Some("140".into()),
    })
    .unwrap();
    compile_university_query(&criteria)
}

const ONE_ROW: &str = r#"{
    "head": { "vars": ["institutionCode", "institutionName", "grade", "courseCode", "courseName"] },
    "results": { "bindings": [ {
        "institutionCode": { "type": "literal", "value": "1518" },
        "institutionName": { "type": "literal", "value": "Instituto Superior Técnico" },
        "grade": {
            "type": "literal",
            "datatype": "http://www.w3.org/2001/XMLSchema#float",
            "value": "179.3"
        },
        "courseCode": { "type": "literal", "value": "9119" },
        "courseName": { "type": "literal", "value": "Engenharia Informática e de Computadores" }
    } ] }
}"#;

#[tokio::test]
async fn test_select_sends_query_text_and_accept_header() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    endpoint.push_json(StatusCode::OK, ONE_ROW).await;
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 0)).unwrap();
    let query = query();

    let rows = store.select(&query).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("grade"), Some("179.3"));
    assert_eq!(rows[0].get("courseCode"), Some("9119"));

    let requests = endpoint.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query.as_deref(), Some(query.text()));
    assert_eq!(
        requests[0].accept.as_deref(),
        Some("application/sparql-results+json")
    );
}

#[tokio::test]
async fn test_client_error_status_is_transport_error_without_retry() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    endpoint
        .push_json(StatusCode::BAD_REQUEST, "MALFORMED QUERY: Lexical error")
        .await;
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 3)).unwrap();

    let err = store.select(&query()).await.unwrap_err();

    assert_eq!(err.kind(), ExecutorErrorKind::Transport);
    assert!(matches!(
        err,
        ExecutorError::Transport {
            status: Some(400),
            ..
        }
    ));
    assert!(err.to_string().contains("MALFORMED QUERY"));
    assert_eq!(endpoint.requests().await.len(), 1);
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    endpoint
        .push_json(StatusCode::SERVICE_UNAVAILABLE, "starting up")
        .await;
    endpoint.push_json(StatusCode::OK, ONE_ROW).await;
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 2)).unwrap();

    let rows = store.select(&query()).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(endpoint.requests().await.len(), 2);
}

#[tokio::test]
async fn test_retries_are_bounded() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    for _ in 0..5 {
        endpoint.push_json(StatusCode::BAD_GATEWAY, "down").await;
    }
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 2)).unwrap();

    let err = store.select(&query()).await.unwrap_err();

    assert!(matches!(
        err,
        ExecutorError::Transport {
            status: Some(502),
            ..
        }
    ));
    assert_eq!(endpoint.requests().await.len(), 3);
}

#[tokio::test]
async fn test_malformed_body_is_protocol_error() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    endpoint.push_json(StatusCode::OK, "not json at all").await;
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 2)).unwrap();

    let err = store.select(&query()).await.unwrap_err();

    assert_eq!(err.kind(), ExecutorErrorKind::Protocol);
    assert_eq!(endpoint.requests().await.len(), 1);
}

#[tokio::test]
async fn test_missing_bindings_is_protocol_error() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    endpoint
        .push_json(StatusCode::OK, r#"{"head":{"vars":[]}}"#)
        .await;
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 0)).unwrap();

    let err = store.select(&query()).await.unwrap_err();

    assert_eq!(err.kind(), ExecutorErrorKind::Protocol);
}

#[tokio::test]
async fn test_unreachable_store_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HttpGraphStore::new(&config(
        format!("http://{addr}/repositories/education"),
        0,
    ))
    .unwrap();

    let err = store.select(&query()).await.unwrap_err();
    assert!(matches!(err, ExecutorError::Transport { status: None, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    endpoint.push(Reply::Delay(Duration::from_secs(3))).await;
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 0)).unwrap();

    let err = store.select(&query()).await.unwrap_err();

    assert!(matches!(err, ExecutorError::Transport { status: None, .. }));
}

#[tokio::test]
async fn test_health_check() {
    let endpoint = FakeSparqlEndpoint::start().await.unwrap();
    endpoint
        .push_json(StatusCode::OK, r#"{"head":{},"boolean":true}"#)
        .await;
    endpoint
        .push_json(StatusCode::NOT_FOUND, "No such repository")
        .await;
    let store = HttpGraphStore::new(&config(endpoint.endpoint(), 0)).unwrap();

    assert!(store.check_health().await);
    assert!(!store.check_health().await);

    let requests = endpoint.requests().await;
    assert_eq!(requests[0].query.as_deref(), Some("ASK { ?s ?p ?o }"));
}
