use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog queries
        .route("/cantidad_filmaciones_mes/:mes", get(handlers::count_by_month))
        .route("/cantidad_filmaciones_dia/:dia", get(handlers::count_by_weekday))
        .route("/score_titulo/:titulo", get(handlers::score_by_title))
        .route("/votos_titulo/:titulo", get(handlers::votes_by_title))
        .route("/get_actor/:nombre", get(handlers::actor_summary))
        .route("/get_director/:nombre", get(handlers::director_summary))
        // Recommendations
        .route("/recomendacion_pelicula/:titulo", get(handlers::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
