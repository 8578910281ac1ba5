/// Ripple Social API - Main entry point
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use auth_tokens::TokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use social_api::{
    config::Config,
    routes,
    store::{ContentStore, IdentityStore, MemoryStore, PgStore},
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Starting Ripple Social API on {}:{}",
        config.app.host,
        config.app.http_port
    );

    let (identity, content): (Arc<dyn IdentityStore>, Arc<dyn ContentStore>) =
        match &config.database {
            Some(db) => {
                let pool = PgPoolOptions::new()
                    .max_connections(db.max_connections)
                    .min_connections(db.min_connections)
                    .acquire_timeout(Duration::from_secs(db.acquire_timeout_secs))
                    .connect(&db.url)
                    .await?;

                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Database connection pool initialized");

                let store = Arc::new(PgStore::new(pool));
                let identity: Arc<dyn IdentityStore> = store.clone();
                let content: Arc<dyn ContentStore> = store;
                (identity, content)
            }
            None => {
                tracing::warn!(
                    "DATABASE_URL not set, falling back to the in-process memory store"
                );
                let store = Arc::new(MemoryStore::new());
                let identity: Arc<dyn IdentityStore> = store.clone();
                let content: Arc<dyn ContentStore> = store;
                (identity, content)
            }
        };

    let tokens = TokenIssuer::new(
        config.auth.jwt_secret.clone(),
        config.auth.access_ttl_secs,
        config.auth.refresh_ttl_secs,
    );

    let state = AppState::new(identity, content, tokens);
    let bind_addr = (config.app.host.clone(), config.app.http_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(TracingLogger::default())
            .configure(routes::configure)
            .route("/health", web::get().to(health_check))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
