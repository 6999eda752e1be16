use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/peliculas", get(handlers::get_movies_by_day))
        .route("/peliculas/", get(handlers::get_movies_by_day))
        .route("/peliculas/cantidad_por_dia", get(handlers::get_counts_by_day))
        .with_state(state)
}
