//! Axum route handlers for file downloads.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::candidates::candidates_to_csv;
use crate::export::questions::questions_to_text;
use crate::models::candidate::Candidate;
use crate::models::question::Mcq;

#[derive(Debug, Deserialize)]
pub struct ExportCandidatesRequest {
    /// Already ranked, best first.
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuestionsRequest {
    pub questions: Vec<Mcq>,
}

/// POST /api/v1/exports/candidates
pub async fn handle_export_candidates(
    Json(request): Json<ExportCandidatesRequest>,
) -> Result<Response, AppError> {
    let body = candidates_to_csv(&request.candidates)?;
    Ok(attachment(
        "text/csv; charset=utf-8",
        timestamped_file_name("candidate_analysis", "csv"),
        body,
    ))
}

/// POST /api/v1/exports/questions
pub async fn handle_export_questions(
    Json(request): Json<ExportQuestionsRequest>,
) -> Result<Response, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation("No questions to export".to_string()));
    }
    Ok(attachment(
        "text/plain; charset=utf-8",
        timestamped_file_name("mcqs", "txt"),
        questions_to_text(&request.questions),
    ))
}

fn timestamped_file_name(prefix: &str, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", Utc::now().format("%Y%m%d_%H%M%S"))
}

fn attachment(content_type: &'static str, file_name: String, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}
