//! Batch screening: job description + resumes in, ranked candidates out.
//!
//! Pipeline: validate → extract job vocabulary → parse resumes → drop
//! placeholders → score → rank → shortlist.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::matching::ranking::{rank_candidates, shortlist};
use crate::matching::scoring::{score_candidate, ScoringWeights};
use crate::matching::skills::{extract_job_skills, SkillMatcher, SkillVocabulary};
use crate::models::candidate::Candidate;
use crate::parsing::resume::{parse_multiple_resumes, ResumeFile};
use crate::parsing::text::DocumentReader;

pub const UNSPECIFIED_JOB_TITLE: &str = "Not specified";

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("Job description is required")]
    MissingJobDescription,

    #[error("At least one resume file is required")]
    NoResumes,

    #[error("No resumes could be parsed successfully")]
    NoParsableResumes,

    #[error("Error processing job matching: {0}")]
    Internal(String),
}

/// Successful batch result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub extracted_skills: SkillVocabulary,
    /// Ranked best-first.
    pub candidates: Vec<Candidate>,
    pub shortlist: Vec<Candidate>,
    pub total_candidates: usize,
    pub skills_found: usize,
    /// Whitespace-separated word count of the job description.
    pub job_description_length: usize,
    pub job_title: String,
}

/// Batch-level failure. Candidate lists are always empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFailure {
    pub error: String,
    pub extracted_skills: SkillVocabulary,
    pub candidates: Vec<Candidate>,
    pub shortlist: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    Ranked(MatchReport),
    Failed(MatchFailure),
}

impl MatchOutcome {
    pub fn failed(error: ScreeningError, extracted_skills: SkillVocabulary) -> Self {
        MatchOutcome::Failed(MatchFailure {
            error: error.to_string(),
            extracted_skills,
            candidates: Vec::new(),
            shortlist: Vec::new(),
        })
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, MatchOutcome::Ranked(_))
    }
}

/// Screens `resumes` against a job description. Never returns an error:
/// batch-level problems come back as `MatchOutcome::Failed`.
pub fn match_resumes_to_job(
    reader: &dyn DocumentReader,
    matcher: &dyn SkillMatcher,
    weights: &ScoringWeights,
    resumes: &[ResumeFile],
    job_description: &str,
    job_title: Option<&str>,
) -> MatchOutcome {
    if job_description.trim().is_empty() {
        return MatchOutcome::failed(ScreeningError::MissingJobDescription, SkillVocabulary::default());
    }
    if resumes.is_empty() {
        return MatchOutcome::failed(ScreeningError::NoResumes, SkillVocabulary::default());
    }

    let job_title = job_title.map(str::trim).filter(|t| !t.is_empty());
    let vocabulary = extract_job_skills(matcher, job_description, job_title);
    if vocabulary.is_empty() {
        warn!("No technical skills detected in job description");
    }

    info!(
        "Screening {} resumes against {} job skills (matcher: {})",
        resumes.len(),
        vocabulary.len(),
        matcher.backend()
    );

    let candidates: Vec<Candidate> = parse_multiple_resumes(reader, matcher, resumes, &vocabulary)
        .into_iter()
        .filter(|c| !c.is_placeholder())
        .collect();

    if candidates.is_empty() {
        return MatchOutcome::failed(ScreeningError::NoParsableResumes, vocabulary);
    }

    let scored = candidates
        .into_iter()
        .map(|mut candidate| {
            score_candidate(&mut candidate, &vocabulary, weights);
            debug!(
                "Scored '{}': skills {}, projects {}, overall {}",
                candidate.name,
                candidate.score.skill_match,
                candidate.score.project_relevance,
                candidate.score.overall_score
            );
            candidate
        })
        .collect();

    let ranked = rank_candidates(scored);
    let top = shortlist(&ranked);

    info!(
        "Ranked {} of {} resumes; top score {}",
        ranked.len(),
        resumes.len(),
        ranked.first().map(|c| c.score.overall_score).unwrap_or_default()
    );

    MatchOutcome::Ranked(MatchReport {
        total_candidates: ranked.len(),
        skills_found: vocabulary.len(),
        job_description_length: job_description.split_whitespace().count(),
        job_title: job_title.unwrap_or(UNSPECIFIED_JOB_TITLE).to_string(),
        extracted_skills: vocabulary,
        candidates: ranked,
        shortlist: top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::ranking::SHORTLIST_SIZE;
    use crate::matching::skills::KeywordSkillMatcher;
    use crate::parsing::text::FileTextExtractor;

    const JOB: &str = "We need a backend engineer with Python, Flask and SQL. Docker is a plus.";

    fn run(resumes: &[ResumeFile], job_description: &str, job_title: Option<&str>) -> MatchOutcome {
        match_resumes_to_job(
            &FileTextExtractor,
            &KeywordSkillMatcher,
            &ScoringWeights::default(),
            resumes,
            job_description,
            job_title,
        )
    }

    fn txt(name: &str, body: &str) -> ResumeFile {
        ResumeFile::new(name, body.as_bytes().to_vec())
    }

    fn expect_failed(outcome: MatchOutcome) -> MatchFailure {
        match outcome {
            MatchOutcome::Failed(failure) => failure,
            MatchOutcome::Ranked(_) => panic!("expected a failed outcome"),
        }
    }

    fn expect_ranked(outcome: MatchOutcome) -> MatchReport {
        match outcome {
            MatchOutcome::Ranked(report) => report,
            MatchOutcome::Failed(f) => panic!("expected a ranked outcome, got: {}", f.error),
        }
    }

    #[test]
    fn test_blank_job_description_fails() {
        let failure = expect_failed(run(&[txt("a.txt", "python")], "  \n\t", None));
        assert_eq!(failure.error, "Job description is required");
        assert!(failure.extracted_skills.is_empty());
        assert!(failure.candidates.is_empty());
        assert!(failure.shortlist.is_empty());
    }

    #[test]
    fn test_no_resumes_fails() {
        let failure = expect_failed(run(&[], JOB, None));
        assert_eq!(failure.error, "At least one resume file is required");
        assert!(failure.candidates.is_empty());
        assert!(failure.shortlist.is_empty());
    }

    #[test]
    fn test_all_unparseable_fails_with_vocabulary() {
        let resumes = vec![
            ResumeFile::new("a.pdf", b"not a pdf".to_vec()),
            ResumeFile::new("b.odt", b"python".to_vec()),
        ];
        let failure = expect_failed(run(&resumes, JOB, None));
        assert_eq!(failure.error, "No resumes could be parsed successfully");
        assert!(failure.extracted_skills.iter().any(|s| s == "python"));
        assert!(failure.candidates.is_empty());
    }

    #[test]
    fn test_ranked_batch() {
        let resumes = vec![
            txt("weak_one.txt", "Retail associate. 1 year of experience."),
            txt(
                "strong_one.txt",
                "Python, Flask, SQL and Docker. 6 years of experience.\n\
                 Developed a Flask API using SQL with 40% faster queries\n\
                 Built Docker images for every service we deployed",
            ),
            ResumeFile::new("broken.pdf", b"%PDF-junk".to_vec()),
            txt("mid_one.txt", "Python scripts and SQL reports. 3 years experience."),
        ];
        let report = expect_ranked(run(&resumes, JOB, Some("Backend Engineer")));

        assert_eq!(report.total_candidates, 3);
        assert_eq!(report.candidates.len(), 3);
        assert_eq!(report.candidates[0].name, "Strong One");
        assert_eq!(report.candidates[2].name, "Weak One");
        assert_eq!(report.shortlist.len(), SHORTLIST_SIZE);
        assert_eq!(report.shortlist[0].file_name, report.candidates[0].file_name);
        assert!(report.candidates.iter().all(|c| !c.is_placeholder()));
        assert_eq!(report.skills_found, report.extracted_skills.len());
        assert_eq!(report.job_description_length, 14);
        assert_eq!(report.job_title, "Backend Engineer");

        for pair in report.candidates.windows(2) {
            assert!(pair[0].score.overall_score >= pair[1].score.overall_score);
        }
        for candidate in &report.candidates {
            assert!(candidate
                .skills
                .iter()
                .all(|s| report.extracted_skills.iter().any(|v| v == s)));
        }
    }

    #[test]
    fn test_empty_vocabulary_still_ranks() {
        let resumes = vec![txt("a.txt", "Gardener with 4 years of experience")];
        let report = expect_ranked(run(&resumes, "Friendly team player wanted", None));
        assert!(report.extracted_skills.is_empty());
        assert_eq!(report.job_title, UNSPECIFIED_JOB_TITLE);
        assert!(report.candidates[0].skills.is_empty());
        assert_eq!(report.candidates[0].score.project_relevance, 0.0);
        // 4 years × 0.1
        assert_eq!(report.candidates[0].score.overall_score, 0.4);
    }

    #[test]
    fn test_outcome_is_tagged() {
        let failed = serde_json::to_value(run(&[], JOB, None)).unwrap();
        assert_eq!(failed["status"], "failed");
        assert_eq!(failed["error"], "At least one resume file is required");

        let ranked = serde_json::to_value(run(&[txt("a.txt", "python")], JOB, None)).unwrap();
        assert_eq!(ranked["status"], "ranked");
        assert_eq!(ranked["total_candidates"], 1);
        assert_eq!(ranked["candidates"][0]["email"], "Not provided");
    }

    #[test]
    fn test_internal_error_message() {
        let outcome = MatchOutcome::failed(
            ScreeningError::Internal("worker panicked".to_string()),
            SkillVocabulary::default(),
        );
        assert!(!outcome.is_ranked());
        let failure = expect_failed(outcome);
        assert_eq!(failure.error, "Error processing job matching: worker panicked");
    }
}
