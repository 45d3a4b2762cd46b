//! Integration tests for Aura Exotixx.
//!
//! Each [`TestContext`] starts the real storefront router on an ephemeral
//! port, backed by a fresh `SQLite` file in a temporary directory. Tests
//! talk to it over HTTP with cookie-enabled `reqwest` clients, one client
//! per simulated visitor.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aura-exotixx-integration-tests
//! ```

use std::path::PathBuf;

use aura_exotixx_storefront::{config::StorefrontConfig, db};
use reqwest::{Client, Response, StatusCode, header::LOCATION, redirect::Policy};
use tempfile::TempDir;

/// The allow-listed admin address.
pub const ADMIN: &str = "shauryave1717@gmail.com";

/// A running storefront and its database.
pub struct TestContext {
    _dir: TempDir,
    database_path: PathBuf,
    base_url: String,
}

impl TestContext {
    /// Start a storefront on `127.0.0.1:0` with an empty database.
    ///
    /// # Panics
    ///
    /// Panics if the database or listener cannot be set up.
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let database_path = dir.path().join("storefront.db");

        let db_path = database_path.display().to_string();
        let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static");
        let config = StorefrontConfig::from_lookup(|key| match key {
            "STOREFRONT_DATABASE_PATH" => Some(db_path.clone()),
            "STOREFRONT_STATIC_DIR" => Some(static_dir.to_string()),
            _ => None,
        })
        .expect("Failed to build config");

        let app = aura_exotixx_storefront::bootstrap(config)
            .await
            .expect("Failed to bootstrap storefront");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            _dir: dir,
            database_path,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A new visitor: own cookie jar, redirects not followed.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn visitor(&self) -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client")
    }

    /// A new visitor signed in as `email`.
    ///
    /// # Panics
    ///
    /// Panics if the login is not accepted.
    pub async fn signed_in(&self, email: &str) -> Client {
        let client = self.visitor();
        let resp = self.post(&client, "/login", &[("email", email)]).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login rejected for {email}");
        assert_eq!(location(&resp), "/");
        client
    }

    /// GET `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails at the transport level.
    pub async fn get(&self, client: &Client, path: &str) -> Response {
        client
            .get(self.url(path))
            .send()
            .await
            .expect("GET failed")
    }

    /// GET `path` and return the body, asserting 200.
    ///
    /// # Panics
    ///
    /// Panics if the response is not 200 OK.
    pub async fn page(&self, client: &Client, path: &str) -> String {
        let resp = self.get(client, path).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
        resp.text().await.expect("Failed to read body")
    }

    /// POST a form to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails at the transport level.
    pub async fn post(&self, client: &Client, path: &str, form: &[(&str, &str)]) -> Response {
        client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST failed")
    }

    /// Write a raw site-scope record, bypassing the storefront.
    ///
    /// # Panics
    ///
    /// Panics if the write fails.
    pub async fn write_site_record(&self, key: &str, value: &str) {
        let pool = db::create_pool(&self.database_path)
            .await
            .expect("Failed to open database");
        sqlx::query(
            "INSERT INTO site_entries (key, value, updated_at) VALUES (?, ?, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&pool)
        .await
        .expect("Failed to write record");
        pool.close().await;
    }

    /// Whether any stored session still holds a record under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the session table cannot be read.
    pub async fn session_holds(&self, key: &str) -> bool {
        let pool = db::create_pool(&self.database_path)
            .await
            .expect("Failed to open database");
        let blobs: Vec<Vec<u8>> = sqlx::query_scalar("SELECT data FROM tower_sessions")
            .fetch_all(&pool)
            .await
            .expect("Failed to read sessions");
        pool.close().await;

        let needle = key.as_bytes();
        blobs
            .iter()
            .any(|data| data.windows(needle.len()).any(|w| w == needle))
    }
}

/// The `Location` header of a redirect.
///
/// # Panics
///
/// Panics if the header is missing.
#[must_use]
pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("missing Location header")
        .to_string()
}
