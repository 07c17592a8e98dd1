#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use auth::Claims;
use catalog_service::bootstrap;
use catalog_service::bootstrap::Registries;
use catalog_service::config::AvatarConfig;
use catalog_service::config::MediaConfig;
use catalog_service::config::PosterConfig;
use catalog_service::inbound::http::router::create_router;
use chrono::Utc;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const MAX_POSTER_SIZE: usize = 64 * 1024;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub media: TempDir,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let media = tempfile::tempdir().expect("Failed to create media directory");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let media_config = MediaConfig {
            cache_control: "public, max-age=60".to_string(),
            default_content_type: "application/octet-stream".to_string(),
            poster: PosterConfig {
                dir: media.path().join("posters"),
                base_url: format!("{}/api/resources/posters", address),
                max_size: MAX_POSTER_SIZE,
            },
            avatar: AvatarConfig {
                dir: media.path().join("avatars"),
            },
        };

        let registries = Registries::build().expect("Failed to build registries");
        let resources = Arc::new(
            bootstrap::media_resources(&media_config).expect("Failed to create media handlers"),
        );

        let router = create_router(registries, resources, TEST_SECRET, MAX_POSTER_SIZE);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            media,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn poster_dir(&self) -> PathBuf {
        self.media.path().join("posters")
    }

    pub fn avatar_dir(&self) -> PathBuf {
        self.media.path().join("avatars")
    }

    /// Sign `claims` with the test secret (HS256)
    pub fn sign(&self, claims: &Claims) -> String {
        sign_with(claims, TEST_SECRET)
    }

    /// Token for `user_id` valid for the next hour
    pub fn token_for(&self, user_id: i64, remembered: bool) -> String {
        let now = Utc::now().timestamp();
        self.sign(&Claims::new(user_id, now, now + 3600).with_remembered(remembered))
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }
}

pub fn sign_with(claims: &Claims, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}
