//! Pause and resume job tests

use crate::assert_ok;
use crate::common::{MockMonitorApi, MonitorFactory};
use monitor_bulk::{BulkRunner, RunOptions};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_pause_all_posts_paused_records() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![
        MonitorFactory::stored("m1", "github.com/", "active"),
        MonitorFactory::stored("m2", "gnu.org/", "paused"),
        MonitorFactory::stored("m3", "mit.edu/", "active"),
    ]))
    .await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/api/monitors/m[0-9]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&api.server)
        .await;

    let client = api.client();
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, RunOptions::default(), &mut out);
    let report = assert_ok!(runner.pause_all().await);

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.skipped, 1);

    let posts = api.requests_with_method("POST").await;
    assert_eq!(posts[0].url.path(), "/api/monitors/m1");
    assert_eq!(posts[1].url.path(), "/api/monitors/m3");

    let body: Value = serde_json::from_slice(&posts[0].body).unwrap();
    assert_eq!(body["id"], "m1");
    assert_eq!(body["status"], "paused");
    // Fields the tool does not model survive the update
    assert_eq!(body["followRedirects"], 5);
    assert_eq!(body["assertions"][0]["type"], "code");
}

#[tokio::test]
async fn test_resume_with_filter() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![
        MonitorFactory::stored("m1", "google.com/", "paused"),
        MonitorFactory::stored("m2", "google.de/", "paused"),
        MonitorFactory::stored("m3", "bing.com/", "paused"),
    ]))
    .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&api.server)
        .await;

    let client = api.client();
    let options = RunOptions {
        filter: Some("google".to_string()),
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, options, &mut out);
    let report = assert_ok!(runner.resume_all().await);

    assert_eq!(report.succeeded, 2);
    let posts = api.requests_with_method("POST").await;
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.url.path() != "/api/monitors/m3"));

    let body: Value = serde_json::from_slice(&posts[1].body).unwrap();
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_pause_fails_when_list_fails() {
    let api = MockMonitorApi::start().await;

    Mock::given(method("GET"))
        .and(path("/api/monitors"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&api.server)
        .await;

    let client = api.client();
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, RunOptions::default(), &mut out);
    let err = runner.pause_all().await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(api.requests_with_method("POST").await.is_empty());
}

#[tokio::test]
async fn test_pause_dry_run_sends_no_post() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![
        MonitorFactory::stored("m1", "github.com/", "active"),
        MonitorFactory::stored("m2", "gnu.org/", "paused"),
    ]))
    .await;

    let client = api.client();
    let options = RunOptions {
        dry_run: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, options, &mut out);
    let report = assert_ok!(runner.pause_all().await);

    assert_eq!(report.planned, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.succeeded, 0);
    assert!(api.requests_with_method("POST").await.is_empty());

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("DRY RUN POST http://"));
    assert!(printed.contains("/api/monitors/m1 status=paused"));
    assert!(printed.contains("m2 already paused"));
}

#[tokio::test]
async fn test_resume_dry_run_sends_no_post() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![MonitorFactory::stored(
        "m1", "github.com/", "paused",
    )]))
    .await;

    let client = api.client();
    let options = RunOptions {
        dry_run: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, options, &mut out);
    let report = assert_ok!(runner.resume_all().await);

    assert_eq!(report.planned, 1);
    assert!(api.requests_with_method("POST").await.is_empty());
}

#[tokio::test]
async fn test_pause_keeps_sparse_record_intact() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![json!({
        "id": "m1",
        "createdAt": "2022-03-01 10:00:00",
        "name": "bare",
        "status": "active",
        "method": "GET",
        "url": "https://bare.example"
    })]))
    .await;

    Mock::given(method("POST"))
        .and(path("/api/monitors/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&api.server)
        .await;

    let client = api.client();
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, RunOptions::default(), &mut out);
    let report = assert_ok!(runner.pause_all().await);
    assert_eq!(report.succeeded, 1);

    let posts = api.requests_with_method("POST").await;
    let body: Value = serde_json::from_slice(&posts[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "id": "m1",
            "createdAt": "2022-03-01 10:00:00",
            "name": "bare",
            "status": "paused",
            "method": "GET",
            "url": "https://bare.example"
        })
    );
}
