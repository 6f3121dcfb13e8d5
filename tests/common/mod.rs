use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use rekcurd_dashboard::auth::jwt::{encode_token, Claims};
use rekcurd_dashboard::config::{AuthMode, Config};

pub const JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Mint a token the way the identity provider would.
    pub fn token_for(&self, user_id: i32) -> String {
        encode_token(&Claims::new(user_id, chrono::Duration::minutes(15)), JWT_SECRET)
            .expect("token encode failed")
    }

    /// POST a form to `path`, optionally authenticated.
    pub async fn post_form(
        &self,
        path: &str,
        token: Option<&str>,
        form: &[(&str, &str)],
    ) -> (Value, StatusCode) {
        let mut req = self.client.post(self.url(path)).form(form);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// PATCH a form to `path`, optionally authenticated.
    pub async fn patch_form(
        &self,
        path: &str,
        token: Option<&str>,
        form: &[(&str, &str)],
    ) -> (Value, StatusCode) {
        let mut req = self.client.patch(self.url(path)).form(form);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.expect("patch request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET `path`, optionally authenticated.
    pub async fn get(&self, path: &str, token: Option<&str>) -> (Value, StatusCode) {
        let mut req = self.client.get(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create a project and return its id, looked up by name.
    pub async fn create_project(&self, token: Option<&str>, name: &str, description: &str) -> i64 {
        let (body, status) = self
            .post_form(
                "/api/projects",
                token,
                &[("display_name", name), ("description", description)],
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create project failed: {body}");

        let (list, _) = self.get("/api/projects", token).await;
        list.as_array()
            .unwrap()
            .iter()
            .find(|p| p["display_name"] == name)
            .and_then(|p| p["project_id"].as_i64())
            .expect("created project missing from list")
    }

    pub async fn project_count(&self) -> i64 {
        rekcurd_dashboard::db::projects::count_all(&self.pool)
            .await
            .unwrap()
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app(auth: bool) -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("dashboard_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        auth: if auth {
            AuthMode::Enabled {
                jwt_secret: JWT_SECRET.to_string(),
            }
        } else {
            AuthMode::Disabled
        },
        max_connections: 5,
        log_level: "warn".to_string(),
    };

    let app = rekcurd_dashboard::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
