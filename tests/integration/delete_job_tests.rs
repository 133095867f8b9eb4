//! Delete job tests

use crate::assert_ok;
use crate::common::{MockMonitorApi, MonitorFactory};
use monitor_bulk::{BulkRunner, RunOptions};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_delete_all_from_plain_list() {
    let api = MockMonitorApi::start().await;
    api.mock_list(json!([
        MonitorFactory::stored("m1", "a.com/", "active"),
        MonitorFactory::stored("m2", "b.com/", "paused"),
    ]))
    .await;

    Mock::given(method("DELETE"))
        .and(path("/api/monitors/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .expect(1)
        .mount(&api.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/monitors/m2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("m2 Not found"))
        .expect(1)
        .mount(&api.server)
        .await;

    let client = api.client();
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, RunOptions::default(), &mut out);
    let report = assert_ok!(runner.delete_all().await);

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.failures[0].label, "m2");

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed,
        "m1\n<Response [200]>\n1\nm2\n<Response [404]>\nm2 Not found\n"
    );
}

#[tokio::test]
async fn test_delete_skips_records_without_id() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![json!({
        "name": "orphan",
        "url": "https://orphan.example"
    })]))
    .await;

    let client = api.client();
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, RunOptions::default(), &mut out);
    let report = assert_ok!(runner.delete_all().await);

    assert_eq!(report.skipped, 1);
    assert!(api.requests_with_method("DELETE").await.is_empty());
}

#[tokio::test]
async fn test_delete_dry_run_only_lists() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![MonitorFactory::stored(
        "m1", "a.com/", "active",
    )]))
    .await;

    let client = api.client();
    let options = RunOptions {
        dry_run: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, options, &mut out);
    let report = assert_ok!(runner.delete_all().await);

    assert_eq!(report.planned, 1);
    assert_eq!(api.requests_with_method("GET").await.len(), 1);
    assert!(api.requests_with_method("DELETE").await.is_empty());

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.ends_with("/api/monitors/m1\n"));
    assert!(printed.contains("DRY RUN DELETE http://"));
}

#[tokio::test]
async fn test_delete_with_filter() {
    let api = MockMonitorApi::start().await;
    api.mock_list(MonitorFactory::page(vec![
        MonitorFactory::stored("m1", "google.com/", "active"),
        MonitorFactory::stored("m2", "bing.com/", "active"),
        MonitorFactory::stored("m3", "google.de/", "paused"),
    ]))
    .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .mount(&api.server)
        .await;

    let client = api.client();
    let options = RunOptions {
        filter: Some("google".to_string()),
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, options, &mut out);
    let report = assert_ok!(runner.delete_all().await);

    assert_eq!(report.succeeded, 2);
    let deletes = api.requests_with_method("DELETE").await;
    let paths: Vec<&str> = deletes.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/api/monitors/m1", "/api/monitors/m3"]);
}

#[tokio::test]
async fn test_list_with_filter() {
    let api = MockMonitorApi::start().await;
    api.mock_list(json!([
        MonitorFactory::stored("m1", "google.com/", "active"),
        MonitorFactory::stored("m2", "bing.com/", "paused"),
    ]))
    .await;

    let client = api.client();
    let options = RunOptions {
        filter: Some("bing".to_string()),
        ..Default::default()
    };
    let mut out = Vec::new();
    let mut runner = BulkRunner::new(&client, options, &mut out);
    let count = assert_ok!(runner.list_all(Default::default()).await);

    assert_eq!(count, 1);
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed,
        "m2\tpaused\tGET\t60s\tbing.com/\thttps://www.bing.com/\n"
    );
}
