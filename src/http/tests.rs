//! Tests for the request executor

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::Method;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::builder("test-key")
        .base_url(base_url)
        .retry(10, Duration::from_millis(10))
        .build()
}

#[test]
fn test_build_url_appends_path_and_key() {
    let executor = Executor::new(test_config("https://warriorplus.com/api/v2")).unwrap();
    let url = executor.build_url("/sales").unwrap();

    assert_eq!(url.path(), "/api/v2/sales");

    let api_keys: Vec<_> = url
        .query_pairs()
        .filter(|(k, _)| k == "apiKey")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(api_keys, vec!["test-key".to_string()]);
}

#[test]
fn test_build_url_exactly_one_api_key_param() {
    let executor = Executor::new(test_config("https://warriorplus.com/api/v2")).unwrap();
    let url = executor.build_url("/payments").unwrap();

    let count = url.query_pairs().filter(|(k, _)| k == "apiKey").count();
    assert_eq!(count, 1);
}

#[test]
fn test_build_url_invalid_base() {
    let executor = Executor::new(test_config("not a url")).unwrap();
    let result = executor.build_url("/sales");

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn test_execute_sends_api_key_on_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let executor = Executor::new(test_config(&mock_server.uri())).unwrap();
    let url = executor.build_url("/sales").unwrap();
    let raw = executor.execute(Method::GET, url).await.unwrap();

    assert_eq!(raw.status, 200);
    assert_eq!(&raw.body[..], b"{}");
}

#[tokio::test]
async fn test_execute_retries_on_429_then_succeeds() {
    let mock_server = MockServer::start().await;
    let k = 3u32;

    // First k calls are rate limited, then the request goes through
    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(u64::from(k))
        .expect(u64::from(k))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let initial = Duration::from_millis(10);
    let config = ClientConfig::builder("test-key")
        .base_url(mock_server.uri())
        .retry(10, initial)
        .build();
    let executor = Executor::new(config).unwrap();
    let url = executor.build_url("/sales").unwrap();

    let start = Instant::now();
    let raw = executor.execute(Method::GET, url).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(raw.status, 200);
    // Backoff doubles after every 429: initial * (2^k - 1) total
    let expected_sleep = initial * (2u32.pow(k) - 1);
    assert!(
        elapsed >= expected_sleep,
        "elapsed {elapsed:?} < expected backoff {expected_sleep:?}"
    );
}

#[tokio::test]
async fn test_execute_retry_limit_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(429))
        .expect(10)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder("test-key")
        .base_url(mock_server.uri())
        .retry(10, Duration::from_millis(1))
        .build();
    let executor = Executor::new(config).unwrap();
    let url = executor.build_url("/sales").unwrap();

    let result = executor.execute(Method::GET, url).await;

    assert!(matches!(
        result,
        Err(Error::RetryLimitExceeded { attempts: 10 })
    ));
    // The expect(10) above verifies exactly 10 attempts on drop
    mock_server.verify().await;
}

#[tokio::test]
async fn test_execute_500_fails_immediately() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Large backoff: any sleep would blow the elapsed assertion below
    let config = ClientConfig::builder("test-key")
        .base_url(mock_server.uri())
        .retry(10, Duration::from_secs(2))
        .build();
    let executor = Executor::new(config).unwrap();
    let url = executor.build_url("/sales").unwrap();

    let start = Instant::now();
    let result = executor.execute(Method::GET, url).await;
    let elapsed = start.elapsed();

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
    assert!(elapsed < Duration::from_secs(1), "500 must not back off");
    mock_server.verify().await;
}

#[tokio::test]
async fn test_execute_404_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such endpoint"))
        .mount(&mock_server)
        .await;

    let executor = Executor::new(test_config(&mock_server.uri())).unwrap();
    let url = executor.build_url("/missing").unwrap();
    let err = executor.execute(Method::GET, url).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("no such endpoint"));
}

#[tokio::test]
async fn test_execute_transport_error_not_retried() {
    // Grab a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::builder("test-key")
        .base_url(format!("http://{addr}"))
        .retry(10, Duration::from_secs(2))
        .build();
    let executor = Executor::new(config).unwrap();
    let url = executor.build_url("/sales").unwrap();

    let start = Instant::now();
    let result = executor.execute(Method::GET, url).await;
    let elapsed = start.elapsed();

    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(
        elapsed < Duration::from_secs(1),
        "transport failures must not back off"
    );
}

#[tokio::test]
async fn test_execute_with_throttle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder("test-key")
        .base_url(mock_server.uri())
        .throttle(ThrottleConfig::new(100, 10))
        .build();
    let executor = Executor::new(config).unwrap();

    for _ in 0..3 {
        let url = executor.build_url("/sales").unwrap();
        let raw = executor.execute(Method::GET, url).await.unwrap();
        assert_eq!(raw.status, 200);
    }
}

#[test]
fn test_executor_debug_redacts_key() {
    let executor = Executor::new(test_config("https://warriorplus.com/api/v2")).unwrap();
    let debug = format!("{executor:?}");
    assert!(debug.contains("Executor"));
    assert!(!debug.contains("test-key"));
}
