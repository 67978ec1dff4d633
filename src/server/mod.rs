// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP adapter over the query engine.
//!
//! A thin axum router: route → handler → core query → JSON. The lexicon is
//! frozen before the router exists, so handlers share it through an `Arc`
//! without any locking. CPU-heavy correction queries run on tokio's blocking
//! pool so a slow fuzzy scan never stalls the async workers.
//!
//! | Route                | Core call                         |
//! |----------------------|-----------------------------------|
//! | `/api/search`        | `lookup`, then `correct` on miss  |
//! | `/api/suggestions`   | `suggest`                         |
//! | `/api/corrections`   | `correct`                         |
//! | `/api/stats`         | counters                          |

pub mod handlers;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::lexicon::Lexicon;

pub use handlers::ApiError;
pub use types::{ErrorResponse, SearchResponse, StatsResponse};

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
/// Default suggestion count.
pub const DEFAULT_SUGGEST_LIMIT: usize = 10;
/// Corrections offered alongside a search miss.
pub const DEFAULT_SEARCH_MAX_DISTANCE: usize = 2;
pub const DEFAULT_SEARCH_LIMIT: usize = 3;
/// Defaults for the explicit corrections endpoint.
pub const DEFAULT_CORRECT_MAX_DISTANCE: usize = 3;
pub const DEFAULT_CORRECT_LIMIT: usize = 10;

/// Endpoint defaults. Query parameters override the limits per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub suggest_limit: usize,
    pub search_max_distance: usize,
    pub search_limit: usize,
    pub correct_max_distance: usize,
    pub correct_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
            search_max_distance: DEFAULT_SEARCH_MAX_DISTANCE,
            search_limit: DEFAULT_SEARCH_LIMIT,
            correct_max_distance: DEFAULT_CORRECT_MAX_DISTANCE,
            correct_limit: DEFAULT_CORRECT_LIMIT,
        }
    }
}

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub lexicon: Arc<Lexicon>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(lexicon: Arc<Lexicon>, config: ServerConfig) -> Self {
        Self {
            lexicon,
            config: Arc::new(config),
        }
    }
}

/// Build the router with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/search", get(handlers::handle_search))
        .route("/api/suggestions", get(handlers::handle_suggestions))
        .route("/api/corrections", get(handlers::handle_corrections))
        .route("/api/stats", get(handlers::handle_stats))
        .fallback(handlers::handle_not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let words = state.lexicon.distinct_word_count();
    let entries = state.lexicon.total_entry_count();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        words,
        entries,
        "dictionary server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        // No signal handler: serve until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
