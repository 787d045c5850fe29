use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{Request, Response},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Span;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    supabase::{QueryService, SupabaseClient},
};

pub use self::error::{Error, Result};

mod config;
mod controllers;
mod error;
mod helpers;
mod models;
mod routes;
mod services;
mod supabase;
mod validators;

#[derive(Clone)]
struct AppState {
    db: Arc<dyn QueryService>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("Starting Hit Songs API...");

    let config = AppConfig::from_env()?;

    tracing::info!("Using Supabase project at: {}", config.supabase_url);

    let db = SupabaseClient::new(&config)?;

    let app_state = AppState { db: Arc::new(db) };

    let routes_all = routes::routes_all(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4();
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    tracing::info!("{} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                    let status = response.status();
                    let latency_ms = latency.as_millis();

                    match status.as_u16() {
                        200..=299 => tracing::info!("{} ({}ms)", status, latency_ms),
                        400..=499 => tracing::warn!("{} ({}ms)", status, latency_ms),
                        500..=599 => tracing::error!("{} ({}ms)", status, latency_ms),
                        _ => tracing::info!("{} ({}ms)", status, latency_ms),
                    }
                }),
        )
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("{}:{}", config.bind_host, config.port)
        .parse()
        .map_err(|_| Error::ConfigError("Invalid bind address".to_string()))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, routes_all).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hit_songs_api_rust=debug,tower_http=info,info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}
