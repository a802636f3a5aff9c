//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application wired with an
//! in-memory code store, a recording mailer and a temporary upload dir.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tempfile::TempDir;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use crm_backend::application::use_cases::{Gateways, UseCases};
use crm_backend::domain::gateways::{MailMessage, Mailer, TokenService, VerifyCodeStore};
use crm_backend::infrastructure::driven_adapters::config::AppConfig;
use crm_backend::infrastructure::driven_adapters::database::{self, Repositories};
use crm_backend::infrastructure::driven_adapters::{
    Argon2PasswordHasher, InMemoryVerifyCodeStore, JwtTokenService, LocalFileStorage,
};
use crm_backend::infrastructure::driving_adapters::api_rest::{self, AppState};
use crm_backend::shared::errors::GatewayError;

/// Test JWT secret (minimum 32 characters)
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-e2e-testing-only-min-32-chars";

pub const TEST_PASSWORD: &str = "s3cret-pass";

/// Upload limit used by the test configuration
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024;

const CODE_TTL: Duration = Duration::from_secs(300);

/// Mailer that keeps every message in memory
#[derive(Default)]
pub struct RecordingMailer {
    messages: Mutex<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub fn messages(&self) -> Vec<MailMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), GatewayError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    pub codes: Arc<InMemoryVerifyCodeStore>,
    pub mailer: Arc<RecordingMailer>,
    pub tokens: Arc<JwtTokenService>,
    pub upload_dir: TempDir,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");
        let upload_dir = TempDir::new().expect("Failed to create upload dir");
        let config = create_test_config(&database_url, &upload_dir);

        let pool = database::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let codes = Arc::new(InMemoryVerifyCodeStore::new());
        let mailer = Arc::new(RecordingMailer::default());
        let tokens = Arc::new(JwtTokenService::new(TEST_JWT_SECRET, 3600));
        let files = LocalFileStorage::new(upload_dir.path(), &config.file.url_prefix);

        let repositories = Repositories::new(&pool);
        let gateways = Gateways {
            users: repositories.users,
            subscriptions: repositories.subscriptions,
            notices: repositories.notices,
            customers: repositories.customers,
            products: repositories.products,
            contracts: repositories.contracts,
            mail_configs: repositories.mail_configs,
            verify_codes: codes.clone(),
            mailer: mailer.clone(),
            files: Arc::new(files),
            password_hasher: Arc::new(Argon2PasswordHasher::new()),
            tokens: tokens.clone(),
        };

        let app_state = AppState {
            config: Arc::new(config),
            tokens: tokens.clone(),
            use_cases: Arc::new(UseCases::new(&gateways, CODE_TTL)),
        };

        // Build router (without rate limiting for tests)
        let router = api_rest::router(app_state, |public| public);

        Self {
            router,
            pool,
            codes,
            mailer,
            tokens,
            upload_dir,
            _container: container,
        }
    }

    /// Send a request and decode the envelope
    pub async fn call(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Value {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).unwrap()).await
    }

    /// Send a prepared request and decode the envelope
    pub async fn send(&self, request: Request<Body>) -> Value {
        let response = self.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), 200, "every endpoint answers HTTP 200");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Seed a verification code without going through the mailer
    pub async fn seed_code(&self, email: &str, code: &str) {
        self.codes.save(email, code, CODE_TTL).await.unwrap();
    }

    /// Register an account and log in, returning `(uid, token)`
    pub async fn register_and_login(&self, email: &str) -> (i64, String) {
        self.seed_code(email, "123456").await;
        let body = self
            .call(
                Method::POST,
                "/user/register",
                None,
                Some(json!({"email": email, "password": TEST_PASSWORD, "code": "123456"})),
            )
            .await;
        assert_eq!(body["code"], 0, "register failed: {body}");

        let body = self
            .call(
                Method::POST,
                "/user/login",
                None,
                Some(json!({"email": email, "password": TEST_PASSWORD})),
            )
            .await;
        assert_eq!(body["code"], 0, "login failed: {body}");

        let uid = body["data"]["uid"].as_i64().unwrap();
        let token = body["data"]["token"].as_str().unwrap().to_string();
        (uid, token)
    }

    /// A token for an arbitrary uid, signed with the test secret
    pub fn token_for(&self, uid: i64) -> String {
        self.tokens
            .issue(crm_backend::domain::models::user::UserId::new(uid))
            .unwrap()
    }

    /// Create a customer and return its id
    pub async fn create_customer(&self, token: &str, name: &str) -> i64 {
        let body = self
            .call(
                Method::POST,
                "/customer/create",
                Some(token),
                Some(json!({"name": name, "phone": "555-0100", "email": "buyer@acme.io"})),
            )
            .await;
        assert_eq!(body["code"], 0, "customer create failed: {body}");

        let body = self
            .call(
                Method::POST,
                "/customer/list",
                Some(token),
                Some(json!({"name": name})),
            )
            .await;
        body["data"]["list"][0]["id"].as_i64().unwrap()
    }
}

/// Create a test configuration
fn create_test_config(database_url: &str, upload_dir: &TempDir) -> AppConfig {
    use config::{Config, File, FileFormat};

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[database]
url = "{database_url}"
max_connections = 5
min_connections = 1

[redis]
url = "redis://unused"

[jwt]
secret = "{TEST_JWT_SECRET}"
expires_in_secs = 3600

[verify_code]
ttl_secs = 300

[mail]
enabled = false
api_url = "http://localhost/unused"
sender = "no-reply@crm.test"
timeout_secs = 1

[file]
path = "{path}"
url_prefix = "/files/"
max_bytes = {TEST_MAX_UPLOAD_BYTES}

[rate_limit]
requests_per_second = 1000
burst_size = 1000

[log]
format = "pretty"
"#,
        path = upload_dir.path().display(),
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Contract request body for a customer
pub fn contract_body(cid: i64, name: &str, status: i16) -> Value {
    json!({
        "name": name,
        "amount": "1200.00",
        "begin_time": "2024-01-01",
        "over_time": "2024-12-31",
        "remarks": "annual",
        "cid": cid,
        "productlist": [
            {"id": 1, "name": "Seat", "type": 1, "unit": "seat", "code": "S-1",
             "price": "100.00", "count": 12, "total": "1200.00"}
        ],
        "status": status
    })
}
