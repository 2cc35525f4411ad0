use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/entries", post(handlers::create_entry_form))
        .route("/api/moods", get(handlers::list_moods))
        .route("/api/entries", get(handlers::list_entries).post(handlers::create_entry))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
