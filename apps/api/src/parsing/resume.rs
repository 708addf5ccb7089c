//! Resume parsing: one uploaded file in, one `Candidate` out.
//!
//! A file that cannot be read never fails the batch: it becomes a placeholder
//! record carrying `PARSE_FAILURE_MARKER`, which the pipeline filters out.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::matching::skills::{SkillMatcher, SkillVocabulary};
use crate::models::candidate::{
    Candidate, CandidateScore, ContactInfo, ExperienceLevel, PARSE_FAILURE_MARKER,
};
use crate::parsing::fields::{
    candidate_name_from_file, count_project_mentions, extract_email, extract_experience_years,
    extract_phone, extract_projects,
};
use crate::parsing::text::{DocumentFormat, DocumentReader, ExtractError};

/// Characters of resume text kept on the candidate record.
const RAW_TEXT_SNIPPET_CHARS: usize = 500;
/// Cap applied to `project_count` for the displayed `projects_count`.
const MAX_DISPLAY_PROJECTS: u32 = 10;

/// An uploaded resume, read fully into memory.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Parses one resume against `vocabulary`.
pub fn parse_resume(
    reader: &dyn DocumentReader,
    matcher: &dyn SkillMatcher,
    file: &ResumeFile,
    vocabulary: &SkillVocabulary,
) -> Candidate {
    match read_resume_text(reader, file) {
        Ok(text) if !text.is_empty() => {
            build_candidate(&text, &file.file_name, matcher, vocabulary)
        }
        Ok(_) => {
            warn!("No text extracted from resume '{}'", file.file_name);
            placeholder_candidate(&file.file_name)
        }
        Err(e) => {
            warn!("Failed to read resume '{}': {e}", file.file_name);
            placeholder_candidate(&file.file_name)
        }
    }
}

/// Parses every file in upload order. Output length always equals input length.
pub fn parse_multiple_resumes(
    reader: &dyn DocumentReader,
    matcher: &dyn SkillMatcher,
    files: &[ResumeFile],
    vocabulary: &SkillVocabulary,
) -> Vec<Candidate> {
    files
        .iter()
        .map(|file| parse_resume(reader, matcher, file, vocabulary))
        .collect()
}

fn read_resume_text(reader: &dyn DocumentReader, file: &ResumeFile) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_file_name(&file.file_name)
        .ok_or_else(|| ExtractError::UnsupportedFormat(file.file_name.clone()))?;
    reader.read_text(&file.bytes, format)
}

/// Builds a candidate from extracted text. Skills are limited to `vocabulary`.
pub fn build_candidate(
    text: &str,
    file_name: &str,
    matcher: &dyn SkillMatcher,
    vocabulary: &SkillVocabulary,
) -> Candidate {
    let skills = matcher.extract(text, vocabulary.as_slice());
    let experience_years = extract_experience_years(text);
    let project_count = count_project_mentions(text);

    debug!(
        "Parsed '{file_name}': {} skills, {experience_years} years, {project_count} project mentions",
        skills.len()
    );

    Candidate {
        name: candidate_name_from_file(file_name),
        contact: ContactInfo {
            email: extract_email(text),
            phone: extract_phone(text),
        },
        score: CandidateScore {
            skill_match: skills.len() as f64,
            ..Default::default()
        },
        skills,
        experience_years,
        experience_level: ExperienceLevel::from_years(experience_years),
        projects: extract_projects(text),
        project_count,
        projects_count: project_count.min(MAX_DISPLAY_PROJECTS),
        file_name: file_name.to_string(),
        raw_text: snippet(text),
    }
}

/// Stand-in record for a file that produced no text.
pub fn placeholder_candidate(file_name: &str) -> Candidate {
    Candidate {
        name: candidate_name_from_file(file_name),
        file_name: file_name.to_string(),
        raw_text: PARSE_FAILURE_MARKER.to_string(),
        ..Default::default()
    }
}

fn snippet(text: &str) -> String {
    match text.char_indices().nth(RAW_TEXT_SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
