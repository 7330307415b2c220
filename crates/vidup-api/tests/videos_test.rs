//! Video API integration tests.
//!
//! Run with: `cargo test -p vidup-api --test videos_test`

mod helpers;

use axum::http::StatusCode;
use helpers::{fixtures, register_video, setup_test_app, video_form};
use serde_json::Value;

#[tokio::test]
async fn test_list_videos_initially_empty() {
    let app = setup_test_app().await;

    let response = app.client().get("/video").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_register_video_assigns_id_and_data_url() {
    let app = setup_test_app().await;

    let video = register_video(app.client(), "clip").await;

    assert_eq!(video["id"].as_u64(), Some(1));
    assert_eq!(video["title"].as_str(), Some("clip"));
    assert_eq!(video["duration"].as_f64(), Some(30.0));
    assert_eq!(video["contentType"].as_str(), Some("video/mp4"));
    let data_url = video["dataUrl"].as_str().expect("dataUrl");
    assert!(data_url.starts_with("http://"));
    assert!(data_url.ends_with("/video/1/data"));
}

#[tokio::test]
async fn test_register_uses_host_header_for_data_url() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/video")
        .add_header("Host", "media.example.com:9000")
        .json(&serde_json::json!({
            "title": "clip",
            "duration": 30,
            "contentType": "video/mp4",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let video = response.json::<Value>();
    assert_eq!(
        video["dataUrl"].as_str(),
        Some("http://media.example.com:9000/video/1/data")
    );
}

#[tokio::test]
async fn test_identifiers_strictly_increasing() {
    let app = setup_test_app().await;

    for (i, expected_id) in (0..3).zip(1u64..) {
        let video = register_video(app.client(), &format!("clip-{}", i)).await;
        assert_eq!(video["id"].as_u64(), Some(expected_id));
    }

    let listed = app.client().get("/video").await.json::<Vec<Value>>();
    let ids: Vec<u64> = listed.iter().filter_map(|v| v["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_upload_and_download_round_trip() {
    let app = setup_test_app().await;
    let client = app.client();

    let video = register_video(client, "clip").await;
    assert_eq!(video["id"].as_u64(), Some(1));

    let payload = fixtures::zero_bytes(1024);
    let response = client
        .post("/video/1/data")
        .multipart(video_form(payload.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        serde_json::json!({ "videoState": "READY" })
    );

    let response = client.get("/video/1/data").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "video/mp4");
    assert_eq!(response.header("content-length"), "1024");
    assert_eq!(response.as_bytes().as_ref(), payload.as_slice());

    // An identifier that was never registered stays a 404.
    let response = client.get("/video/2/data").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_download_preserves_arbitrary_bytes() {
    let app = setup_test_app().await;
    let client = app.client();

    register_video(client, "clip").await;

    let payload = fixtures::create_test_mp4();
    client
        .post("/video/1/data")
        .multipart(video_form(payload.clone()))
        .await
        .assert_status_ok();

    let response = client.get("/video/1/data").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), payload.as_slice());
}

#[tokio::test]
async fn test_reupload_overwrites_payload() {
    let app = setup_test_app().await;
    let client = app.client();

    register_video(client, "clip").await;

    client
        .post("/video/1/data")
        .multipart(video_form(fixtures::zero_bytes(2048)))
        .await
        .assert_status_ok();
    client
        .post("/video/1/data")
        .multipart(video_form(b"replacement".to_vec()))
        .await
        .assert_status_ok();

    let response = client.get("/video/1/data").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-length"), "11");
    assert_eq!(response.as_bytes().as_ref(), b"replacement");
}

#[tokio::test]
async fn test_download_before_upload_is_not_found() {
    let app = setup_test_app().await;
    let client = app.client();

    register_video(client, "clip").await;

    let response = client.get("/video/1/data").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_to_unregistered_id_has_no_side_effects() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/video/99/data")
        .multipart(video_form(fixtures::zero_bytes(16)))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // No registry entry was created...
    assert_eq!(client.get("/video").await.json::<Vec<Value>>().len(), 0);
    // ...no payload was stored...
    assert_eq!(
        client.get("/video/99/data").await.status_code(),
        StatusCode::NOT_FOUND
    );
    // ...and the identifier counter did not move.
    let video = register_video(client, "clip").await;
    assert_eq!(video["id"].as_u64(), Some(1));
}

#[tokio::test]
async fn test_upload_without_data_field_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    register_video(client, "clip").await;

    let form = axum_test::multipart::MultipartForm::new().add_part(
        "file",
        axum_test::multipart::Part::bytes(fixtures::zero_bytes(16)),
    );
    let response = client.post("/video/1/data").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"].as_str(), Some("INVALID_INPUT"));

    // The rejected upload must not have stored anything.
    assert_eq!(
        client.get("/video/1/data").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"].as_str(), Some("healthy"));
    assert_eq!(body["storage"].as_str(), Some("healthy"));
}
