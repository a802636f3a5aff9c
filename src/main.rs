//! CRM Backend API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crm_backend::application::use_cases::{Gateways, UseCases};
use crm_backend::domain::gateways::{Mailer, TokenService};
use crm_backend::infrastructure::driven_adapters::config::{AppConfig, LogConfig, LogFormat};
use crm_backend::infrastructure::driven_adapters::database::{self, Repositories};
use crm_backend::infrastructure::driven_adapters::{
    Argon2PasswordHasher, HttpMailer, JwtTokenService, LocalFileStorage, LogMailer,
    RedisVerifyCodeStore,
};
use crm_backend::infrastructure::driving_adapters::api_rest::{self, AppState};

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "crm_backend=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match log.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(&config.log);
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    let verify_codes = RedisVerifyCodeStore::connect(&config.redis.url)
        .await
        .context("connecting to redis")?;
    tracing::info!("Redis connection established");

    let mailer: Arc<dyn Mailer> = if config.mail.enabled {
        Arc::new(HttpMailer::new(
            config.mail.api_url.clone(),
            config.mail.sender.clone(),
            config.mail.api_token.clone(),
            Duration::from_secs(config.mail.timeout_secs),
        )?)
    } else {
        tracing::warn!("Mail delivery disabled, messages are only logged");
        Arc::new(LogMailer)
    };

    let files = LocalFileStorage::new(&config.file.path, &config.file.url_prefix);
    files.ensure_root().await?;

    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        &config.jwt.secret,
        config.jwt.expires_in_secs,
    ));

    // Wire gateways into use cases
    let repositories = Repositories::new(&pool);
    let gateways = Gateways {
        users: repositories.users,
        subscriptions: repositories.subscriptions,
        notices: repositories.notices,
        customers: repositories.customers,
        products: repositories.products,
        contracts: repositories.contracts,
        mail_configs: repositories.mail_configs,
        verify_codes: Arc::new(verify_codes),
        mailer,
        files: Arc::new(files),
        password_hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: tokens.clone(),
    };
    let use_cases = UseCases::new(&gateways, config.verify_code.ttl());

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        tokens,
        use_cases: Arc::new(use_cases),
    };

    // Public user routes are limited per client IP
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit.requests_per_second)
            .burst_size(config.rate_limit.burst_size)
            .finish()
            .context("invalid rate limit configuration")?,
    );

    // Build router
    let app = api_rest::router(app_state, |public| {
        public.layer(GovernorLayer {
            config: governor_conf,
        })
    })
    .layer(TraceLayer::new_for_http())
    .layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
