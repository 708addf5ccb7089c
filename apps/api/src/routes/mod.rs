pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::matching::handlers as screening;
use crate::questions::handlers as questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_request_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/screening/match", post(screening::handle_match))
        .route("/api/v1/screening/skills", post(screening::handle_extract_skills))
        .route("/api/v1/screening/analysis", post(screening::handle_analyze_candidate))
        .route("/api/v1/resumes/parse", post(screening::handle_parse_resumes))
        // Questions API
        .route("/api/v1/questions", post(questions::handle_generate_questions))
        // Export API
        .route("/api/v1/exports/candidates", post(export::handle_export_candidates))
        .route("/api/v1/exports/questions", post(export::handle_export_questions))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
