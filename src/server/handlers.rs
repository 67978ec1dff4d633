//! Route handlers. Each one decodes its query, calls into the core, and
//! serializes the result. Nothing here knows how lookups work.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{
    CorrectParams, ErrorResponse, SearchParams, SearchResponse, StatsResponse, SuggestParams,
};
use super::AppState;
use crate::error::LexiconError;
use crate::search::{correct, lookup, suggest};
use crate::types::{Limit, MaxDistance};

/// Errors a handler can return.
#[derive(Debug)]
pub enum ApiError {
    Lexicon(LexiconError),
    /// Query string that doesn't decode into the route's parameters.
    Query(QueryRejection),
    /// The blocking query task panicked or was cancelled.
    Task(String),
}

impl From<LexiconError> for ApiError {
    fn from(err: LexiconError) -> Self {
        ApiError::Lexicon(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Query(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Lexicon(err) if err.is_invalid_argument() => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Lexicon(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Query(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Task(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        tracing::debug!(%status, %message, "request failed");
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Run a CPU-bound query off the async worker threads.
async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Task(e.to_string()))
}

/// `GET /api/search?word=` exact lookup, with corrections on a miss.
pub async fn handle_search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    let max_distance = state.config.search_max_distance;
    let limit = state.config.search_limit;

    let response = blocking(move || {
        let result = lookup(&state.lexicon, &params.word);
        let lexicon = &state.lexicon;
        let word = params.word.clone();
        SearchResponse::from_lookup(params.word, result, || {
            correct(lexicon, &word, max_distance, limit)
        })
    })
    .await?;

    Ok(Json(response))
}

/// `GET /api/suggestions?prefix=&limit=` prefix autocomplete.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    query: Result<Query<SuggestParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(params) = query?;
    let limit = params
        .limit
        .map(Limit::from_signed)
        .unwrap_or(Limit(state.config.suggest_limit));
    Ok(Json(suggest(&state.lexicon, &params.prefix, limit.get())))
}

/// `GET /api/corrections?word=&max_distance=&limit=` spelling corrections.
pub async fn handle_corrections(
    State(state): State<AppState>,
    query: Result<Query<CorrectParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(params) = query?;
    let max_distance = match params.max_distance {
        Some(value) => MaxDistance::try_from(value)?,
        None => MaxDistance(state.config.correct_max_distance),
    };
    let limit = params
        .limit
        .map(Limit::from_signed)
        .unwrap_or(Limit(state.config.correct_limit));

    let corrections = blocking(move || {
        correct(&state.lexicon, &params.word, max_distance.get(), limit.get())
    })
    .await?;

    Ok(Json(corrections))
}

/// `GET /api/stats` lexicon size.
pub async fn handle_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        words: state.lexicon.distinct_word_count(),
        entries: state.lexicon.total_entry_count(),
    })
}

/// Anything else.
pub async fn handle_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
