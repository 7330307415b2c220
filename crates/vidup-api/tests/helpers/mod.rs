//! Test helpers: build the application router and a TestServer over
//! tempdir-backed storage.
//!
//! Run from workspace root: `cargo test -p vidup-api --test videos_test` or
//! `cargo test -p vidup-api`.

pub mod fixtures;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::sync::Arc;
use tempfile::TempDir;
use vidup_api::setup::routes::setup_routes;
use vidup_api::state::AppState;
use vidup_core::Config;
use vidup_storage::{BlobStore, LocalBlobStore};

/// Test application: server plus the owned storage directory.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Path of the blob store's backing directory.
    pub fn storage_path(&self) -> &std::path::Path {
        self._temp_dir.path()
    }
}

pub fn test_config(storage_path: &std::path::Path, max_upload_size_bytes: usize) -> Config {
    Config {
        server_port: 8080,
        storage_path: storage_path.to_string_lossy().into_owned(),
        public_address: "localhost:8080".to_string(),
        max_upload_size_bytes,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
    }
}

/// Setup a test app with isolated storage and a fresh registry.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_max_upload(8 * 1024 * 1024).await
}

/// Same as [`setup_test_app`] but with a custom upload size limit.
pub async fn setup_test_app_with_max_upload(max_upload_size_bytes: usize) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(temp_dir.path(), max_upload_size_bytes);

    let blob_store: Arc<dyn BlobStore> = Arc::new(
        LocalBlobStore::new(temp_dir.path())
            .await
            .expect("Failed to create blob store"),
    );

    let state = Arc::new(AppState::new(config, blob_store));
    let router = setup_routes(&state.config, state.clone()).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

/// Register a video with default metadata and return the parsed response.
pub async fn register_video(server: &TestServer, title: &str) -> serde_json::Value {
    let response = server
        .post("/video")
        .json(&serde_json::json!({
            "title": title,
            "duration": 30,
            "contentType": "video/mp4",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<serde_json::Value>()
}

/// Multipart form with the payload under the "data" field, as the upload
/// endpoint expects.
pub fn video_form(data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "data",
        Part::bytes(data).file_name("clip.mp4").mime_type("video/mp4"),
    )
}
