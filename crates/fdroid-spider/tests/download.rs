mod common;

use axum::http::StatusCode;
use fdroid_spider::fs::download_file;
use fdroid_spider::manifest::fetch_index;
use fdroid_spider::{Feed, Outcome, SpiderError};
use serde_json::json;

#[tokio::test]
async fn existing_target_is_not_fetched_again() {
    let server = common::server()
        .json("/http01.fdroid.net/2024-01-01.json", json!({ "hits": 1 }))
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let origin = &Feed::Apps.origins(&server.config(dir.path()))[0];

    let target = origin.target("2024-01-01.json");
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::fs::write(&target, "already here").unwrap();

    let outcome = download_file(&common::client(), origin, "2024-01-01.json").await;

    assert_eq!(outcome, Outcome::Skipped);
    assert!(outcome.is_success());
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "already here");
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn downloaded_file_is_pretty_printed_json() {
    let body = json!({ "hits": 42, "paths": { "/repo/index-v2.json": 7 } });
    let server = common::server()
        .json("/http02.fdroid.net/2024-01-15.json", body.clone())
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let origin = &Feed::Apps.origins(&server.config(dir.path()))[1];

    let outcome = download_file(&common::client(), origin, "2024-01-15.json").await;
    assert_eq!(outcome, Outcome::Downloaded);

    let target = dir.path().join("apps/http02.fdroid.net/2024-01-15.json");
    let text = std::fs::read_to_string(&target).unwrap();
    assert!(text.starts_with("{\n  \"hits\": 42"));
    assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap(), body);

    // a second run is a no-op
    let outcome = download_file(&common::client(), origin, "2024-01-15.json").await;
    assert_eq!(outcome, Outcome::Skipped);
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn content_is_saved_as_published() {
    let server = common::server()
        .raw(
            "/http03.fdroid.net/2024-01-20.json",
            StatusCode::OK,
            r#"{"zeta": 1, "alpha": 2.50, "big": 123456789012345678901234567890}"#,
        )
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let origin = &Feed::Apps.origins(&server.config(dir.path()))[2];

    let outcome = download_file(&common::client(), origin, "2024-01-20.json").await;
    assert_eq!(outcome, Outcome::Downloaded);

    // key order and number literals survive, only the layout changes
    let text = std::fs::read_to_string(origin.target("2024-01-20.json")).unwrap();
    assert_eq!(
        text,
        "{\n  \"zeta\": 1,\n  \"alpha\": 2.50,\n  \"big\": 123456789012345678901234567890\n}"
    );
}

#[tokio::test]
async fn failures_are_reported_not_raised() {
    let server = common::server()
        .raw("/search.f-droid.org/2024-01-01.json", StatusCode::OK, "<html>not json</html>")
        .raw(
            "/search.f-droid.org/2024-01-02.json",
            StatusCode::INTERNAL_SERVER_ERROR,
            "{}",
        )
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let origin = &Feed::Search.origins(&server.config(dir.path()))[0];
    let client = common::client();

    for filename in ["2024-01-01.json", "2024-01-02.json", "2024-01-03.json"] {
        let outcome = download_file(&client, origin, filename).await;
        assert_eq!(outcome, Outcome::Failed, "{filename}");
        assert!(!origin.target(filename).exists(), "{filename}");
    }
}

#[tokio::test]
async fn index_errors_are_classified() {
    let server = common::server()
        .json("/http01.fdroid.net/index.json", json!(["2024-01-01.json", "bad.json"]))
        .raw("/http02.fdroid.net/index.json", StatusCode::OK, "not json")
        .raw("/http03.fdroid.net/index.json", StatusCode::SERVICE_UNAVAILABLE, "")
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let origins = Feed::Apps.origins(&server.config(dir.path()));
    let client = common::client();

    let index = fetch_index(&client, &origins[0]).await.unwrap();
    assert_eq!(index, vec!["2024-01-01.json", "bad.json"]);

    let err = fetch_index(&client, &origins[1]).await.unwrap_err();
    assert!(err.is_parse(), "{err}");

    let err = fetch_index(&client, &origins[2]).await.unwrap_err();
    assert!(err.is_network(), "{err}");
    assert!(matches!(
        err,
        SpiderError::Status { status, .. } if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
    ));
}
