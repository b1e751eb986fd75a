use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        ActorResponse, DirectedMovie, DirectorResponse, MonthCountResponse,
        RecommendationResponse, Role, ScoreResponse, VotesResponse, WeekdayCountResponse,
    },
    services::locale::{parse_month, parse_weekday},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Number of movies released in a month given by its Spanish name
pub async fn count_by_month(
    State(state): State<AppState>,
    Path(mes): Path<String>,
) -> AppResult<Json<MonthCountResponse>> {
    let month = parse_month(&mes).ok_or_else(|| {
        AppError::InvalidInput(format!("{} is not a valid month, use a Spanish month name", mes))
    })?;

    let cantidad = state.catalog.count_by_month(month);
    tracing::debug!(month = month, count = cantidad, "Counted releases by month");

    Ok(Json(MonthCountResponse { mes, cantidad }))
}

/// Number of movies released on a weekday given by its Spanish name
pub async fn count_by_weekday(
    State(state): State<AppState>,
    Path(dia): Path<String>,
) -> AppResult<Json<WeekdayCountResponse>> {
    let weekday = parse_weekday(&dia).ok_or_else(|| {
        AppError::InvalidInput(format!("{} is not a valid day, use a Spanish day name", dia))
    })?;

    let cantidad = state.catalog.count_by_weekday(weekday);
    tracing::debug!(weekday = ?weekday, count = cantidad, "Counted releases by weekday");

    Ok(Json(WeekdayCountResponse { dia, cantidad }))
}

/// Release year and popularity of a title
pub async fn score_by_title(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<ScoreResponse>> {
    let movie = state
        .catalog
        .lookup_by_title(&titulo)
        .ok_or(AppError::TitleNotFound(titulo))?;

    Ok(Json(ScoreResponse {
        titulo: movie.title.clone(),
        anio: movie.release_year,
        popularidad: movie.popularity,
    }))
}

/// Vote count and average of a title with enough votes
pub async fn votes_by_title(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<VotesResponse>> {
    let movie = state
        .catalog
        .lookup_by_title(&titulo)
        .ok_or(AppError::TitleNotFound(titulo))?;

    if movie.vote_count < state.min_votes {
        return Err(AppError::InsufficientVotes {
            title: movie.title.clone(),
            votes: movie.vote_count,
            required: state.min_votes,
        });
    }

    Ok(Json(VotesResponse {
        titulo: movie.title.clone(),
        anio: movie.release_year,
        votos: movie.vote_count,
        promedio: movie.vote_average,
    }))
}

/// Number of appearances and return totals for an actor
pub async fn actor_summary(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> AppResult<Json<ActorResponse>> {
    let summary = state.catalog.aggregate_by_person(&nombre, Role::Actor)?;

    Ok(Json(ActorResponse {
        actor: nombre,
        cantidad: summary.count,
        retorno_total: summary.total_return,
        retorno_promedio: summary.average_return,
    }))
}

/// Return total and per-movie financials for a director
pub async fn director_summary(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> AppResult<Json<DirectorResponse>> {
    let summary = state.catalog.aggregate_by_person(&nombre, Role::Director)?;

    Ok(Json(DirectorResponse {
        director: nombre,
        retorno_total: summary.total_return,
        peliculas: summary.movies.into_iter().map(DirectedMovie::from).collect(),
    }))
}

/// Titles most similar to the requested one
///
/// Scoring is CPU-bound, so it runs on the blocking pool.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(titulo): Path<String>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        title = %titulo,
        "Processing recommendation request"
    );

    let recommender = Arc::clone(&state.recommender);
    let recommended = tokio::task::spawn_blocking(move || recommender.recommend(&titulo))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    tracing::info!(
        request_id = %request_id,
        results = recommended.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse { recommended }))
}
