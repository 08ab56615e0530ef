use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

use factline_common::Config;
use factline_core::{AggregateTable, CommandProcessor};
use factline_journal::Journal;

mod rest;

/// Everything behind the write lock. One guard covers the existence check,
/// the journal append and the projection, which keeps events totally
/// ordered; readers share the lock against a consistent table.
pub struct Core {
    pub processor: CommandProcessor,
    pub aggregates: AggregateTable,
}

pub struct AppState {
    pub core: RwLock<Core>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("factline=info".parse()?))
        .init();

    let config = Config::from_env();

    // Replay before serving: no request sees a half-restored table.
    let journal = Journal::open(&config.journal_path)?;
    let aggregates = AggregateTable::restore(&journal)?;
    let processor = CommandProcessor::new(journal);

    let state = Arc::new(AppState {
        core: RwLock::new(Core {
            processor,
            aggregates,
        }),
    });

    let app = Router::new()
        // Liveness
        .route("/api", get(rest::api_root))
        // Entity CRUD
        .route(
            "/api/v1/{entity}",
            get(rest::api_list).post(rest::api_create),
        )
        .route(
            "/api/v1/{entity}/{id}",
            get(rest::api_get)
                .put(rest::api_update)
                .patch(rest::api_patch)
                .delete(rest::api_delete),
        )
        .with_state(state)
        // Static frontend
        .fallback_service(tower_http::services::ServeDir::new(&config.static_dir))
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        );

    let addr = format!("{}:{}", config.host, config.port);
    info!(journal = %config.journal_path, "factline starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
