//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::matching::gap::{analyze_candidate, CandidateAnalysis};
use crate::matching::pipeline::{match_resumes_to_job, MatchOutcome, ScreeningError};
use crate::matching::skills::{extract_job_skills, SkillVocabulary};
use crate::models::candidate::Candidate;
use crate::parsing::resume::{parse_multiple_resumes, ResumeFile};
use crate::parsing::text::DocumentFormat;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub job_description: String,
    #[serde(default)]
    pub job_title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillVocabulary,
    pub skills_found: usize,
    pub matcher: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeCandidateRequest {
    pub candidate: Candidate,
    pub skills: SkillVocabulary,
}

#[derive(Debug, Serialize)]
pub struct ParseResumesResponse {
    pub candidates: Vec<Candidate>,
    pub parsed: usize,
    pub failed: usize,
}

/// Fields collected from a screening multipart form.
#[derive(Debug, Default)]
struct UploadForm {
    job_description: Option<String>,
    job_description_file: Option<ResumeFile>,
    job_title: Option<String>,
    skills: Option<String>,
    resumes: Vec<ResumeFile>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screening/match
///
/// Multipart: `job_description` (text or file), optional `job_title`, and one
/// `resumes` part per file. Pipeline-level failures come back as a
/// `status: "failed"` outcome with 200; malformed uploads are rejected.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchOutcome>, AppError> {
    let form = read_upload_form(multipart, &state).await?;
    info!(
        "Screening request: {} resumes, job title {:?}",
        form.resumes.len(),
        form.job_title
    );

    let worker_state = state.clone();
    let outcome = tokio::task::spawn_blocking(move || -> Result<MatchOutcome, AppError> {
        let job_description = resolve_job_description(&worker_state, &form)?;
        Ok(match_resumes_to_job(
            worker_state.document_reader.as_ref(),
            worker_state.skill_matcher.as_ref(),
            &worker_state.scoring_weights,
            &form.resumes,
            &job_description,
            form.job_title.as_deref(),
        ))
    })
    .await
    .unwrap_or_else(|e| {
        error!("Screening worker failed: {e}");
        Ok(MatchOutcome::failed(
            ScreeningError::Internal(e.to_string()),
            SkillVocabulary::default(),
        ))
    })?;

    if let MatchOutcome::Failed(failure) = &outcome {
        info!("Screening failed: {}", failure.error);
    }
    debug!("Screening outcome ranked: {}", outcome.is_ranked());

    Ok(Json(outcome))
}

/// POST /api/v1/resumes/parse
///
/// Parses uploaded resumes without a job. The optional `skills` field is a
/// comma-separated vocabulary; the default keyword list applies without it.
/// Unreadable files are returned as placeholder records.
pub async fn handle_parse_resumes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResumesResponse>, AppError> {
    let form = read_upload_form(multipart, &state).await?;
    if form.resumes.is_empty() {
        return Err(AppError::Validation(
            ScreeningError::NoResumes.to_string(),
        ));
    }

    let vocabulary = match form.skills.as_deref() {
        Some(list) if !list.trim().is_empty() => SkillVocabulary::new(list.split(',')),
        _ => SkillVocabulary::default_keywords(),
    };

    let worker_state = state.clone();
    let candidates = tokio::task::spawn_blocking(move || {
        parse_multiple_resumes(
            worker_state.document_reader.as_ref(),
            worker_state.skill_matcher.as_ref(),
            &form.resumes,
            &vocabulary,
        )
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    let failed = candidates.iter().filter(|c| c.is_placeholder()).count();
    Ok(Json(ParseResumesResponse {
        parsed: candidates.len() - failed,
        failed,
        candidates,
    }))
}

/// POST /api/v1/screening/skills
///
/// Returns the skill vocabulary detected in a job description.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            ScreeningError::MissingJobDescription.to_string(),
        ));
    }

    let skills = extract_job_skills(
        state.skill_matcher.as_ref(),
        &request.job_description,
        request.job_title.as_deref(),
    );

    Ok(Json(ExtractSkillsResponse {
        skills_found: skills.len(),
        skills,
        matcher: state.skill_matcher.backend(),
    }))
}

/// POST /api/v1/screening/analysis
///
/// Detailed report for one already scored candidate against a vocabulary.
pub async fn handle_analyze_candidate(
    Json(request): Json<AnalyzeCandidateRequest>,
) -> Result<Json<CandidateAnalysis>, AppError> {
    if request.candidate.is_placeholder() {
        return Err(AppError::UnprocessableEntity(format!(
            "Resume '{}' could not be parsed",
            request.candidate.file_name
        )));
    }
    Ok(Json(analyze_candidate(&request.candidate, &request.skills)))
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload_form(mut multipart: Multipart, state: &AppState) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);

        match (field_name.as_str(), file_name) {
            ("resumes", file_name) => {
                if form.resumes.len() >= state.config.max_upload_files {
                    return Err(AppError::Validation(format!(
                        "At most {} resumes can be screened at once",
                        state.config.max_upload_files
                    )));
                }
                let file_name = file_name.unwrap_or_else(|| "unknown".to_string());
                let bytes = field.bytes().await?;
                check_file_size(&file_name, bytes.len(), state)?;
                form.resumes.push(ResumeFile::new(file_name, bytes));
            }
            ("job_description", Some(file_name)) => {
                let bytes = field.bytes().await?;
                check_file_size(&file_name, bytes.len(), state)?;
                form.job_description_file = Some(ResumeFile::new(file_name, bytes));
            }
            ("job_description", None) => form.job_description = Some(field.text().await?),
            ("job_title", _) => form.job_title = Some(field.text().await?),
            ("skills", _) => form.skills = Some(field.text().await?),
            (other, _) => debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    Ok(form)
}

fn check_file_size(file_name: &str, len: usize, state: &AppState) -> Result<(), AppError> {
    if len > state.config.max_file_size_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "'{file_name}' exceeds the {} byte upload limit",
            state.config.max_file_size_bytes
        )));
    }
    Ok(())
}

/// Job description text: the text field when non-blank, otherwise the
/// uploaded job description file, otherwise empty.
fn resolve_job_description(state: &AppState, form: &UploadForm) -> Result<String, AppError> {
    if let Some(text) = form.job_description.as_ref().filter(|t| !t.trim().is_empty()) {
        return Ok(text.clone());
    }
    let Some(file) = &form.job_description_file else {
        return Ok(String::new());
    };

    let format = DocumentFormat::from_file_name(&file.file_name).ok_or_else(|| {
        AppError::Validation(format!(
            "Unsupported job description file '{}'; expected one of {}",
            file.file_name,
            DocumentFormat::ALLOWED_EXTENSIONS.join(", ")
        ))
    })?;
    state
        .document_reader
        .read_text(&file.bytes, format)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read job description: {e}")))
}
