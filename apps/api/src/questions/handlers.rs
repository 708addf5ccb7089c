//! Axum route handlers for the Questions API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::skills::{extract_job_skills, SkillVocabulary};
use crate::models::question::{Difficulty, Mcq};
use crate::questions::selector::generate_questions;
use crate::state::AppState;

/// Upper bound on questions per request.
const MAX_QUESTION_COUNT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    /// Explicit vocabulary. When absent, derived from `job_description`.
    #[serde(default)]
    pub skills: Option<SkillVocabulary>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Mcq>,
    pub count: usize,
    pub difficulty: Difficulty,
    pub skills: SkillVocabulary,
}

/// POST /api/v1/questions
///
/// Draws interview MCQs for a skill list (or a job description's skills),
/// backfilled with general programming questions.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let count = request.count.unwrap_or(state.config.default_question_count);
    if count == 0 || count > MAX_QUESTION_COUNT {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_QUESTION_COUNT}"
        )));
    }

    let skills = match request.skills {
        Some(skills) => skills,
        None => extract_job_skills(
            state.skill_matcher.as_ref(),
            request.job_description.as_deref().unwrap_or_default(),
            request.job_title.as_deref(),
        ),
    };

    let questions = generate_questions(
        &mut rand::thread_rng(),
        skills.as_slice(),
        count,
        request.difficulty,
    );
    info!(
        "Generated {} of {count} requested questions for {} skills",
        questions.len(),
        skills.len()
    );

    Ok(Json(GenerateQuestionsResponse {
        count: questions.len(),
        questions,
        difficulty: request.difficulty,
        skills,
    }))
}
