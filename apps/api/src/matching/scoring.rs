use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillVocabulary;
use crate::models::candidate::Candidate;

/// Weights of the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub project_relevance: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.3,
            project_relevance: 0.6,
            experience: 0.1,
        }
    }
}

/// Years of experience beyond this add nothing to the overall score.
pub const EXPERIENCE_CAP_YEARS: u32 = 10;
/// Upper bound of project depth, project relevance and the overall score.
pub const MAX_SCORE: f64 = 10.0;

const TECH_VERBS: &[&str] = &[
    "developed",
    "built",
    "engineered",
    "implemented",
    "optimized",
    "designed",
    "architected",
];
const SPECIFICITY_WORDS: &[&str] = &["using", "with", "utilizing", "via"];

static QUANTIFIED_RESULT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\$\d+|\d+x").expect("valid quantified-result regex"));

/// Saturating 0–10 estimate of how much implementation a project statement shows.
///
/// +1 per technical verb, +2 for tooling words ("using", "with", …),
/// +3 for a quantified result (`40%`, `$5`, `3x`), +2 per vocabulary skill
/// mentioned. Checks are plain substring tests on the lower-cased text.
pub fn compute_project_depth(project_text: &str, vocabulary: &SkillVocabulary) -> f64 {
    let project_lower = project_text.to_lowercase();
    let mut score = 0u32;

    score += TECH_VERBS
        .iter()
        .filter(|verb| project_lower.contains(*verb))
        .count() as u32;

    if SPECIFICITY_WORDS.iter().any(|w| project_lower.contains(w)) {
        score += 2;
    }

    if QUANTIFIED_RESULT.is_match(project_text) {
        score += 3;
    }

    score += 2 * vocabulary
        .iter()
        .filter(|skill| project_lower.contains(&skill.to_lowercase()))
        .count() as u32;

    (score as f64).min(MAX_SCORE)
}

/// Mean project depth, doubled and capped at 10. Zero when either side is empty.
pub fn compute_project_relevance(projects: &[String], vocabulary: &SkillVocabulary) -> f64 {
    if projects.is_empty() || vocabulary.is_empty() {
        return 0.0;
    }
    let total: f64 = projects
        .iter()
        .map(|p| compute_project_depth(p, vocabulary))
        .sum();
    (total / projects.len() as f64 * 2.0).min(MAX_SCORE)
}

/// skill_match×0.3 + project_relevance×0.6 + min(years, 10)×0.1, rounded to 1 decimal.
pub fn compute_overall_score(
    skill_match: f64,
    project_relevance: f64,
    experience_years: u32,
    weights: &ScoringWeights,
) -> f64 {
    let experience = experience_years.min(EXPERIENCE_CAP_YEARS) as f64;
    let raw = skill_match * weights.skill_match
        + project_relevance * weights.project_relevance
        + experience * weights.experience;
    round_to_tenth(raw)
}

/// Fills in `project_relevance` and `overall_score` on a parsed candidate.
pub fn score_candidate(candidate: &mut Candidate, vocabulary: &SkillVocabulary, weights: &ScoringWeights) {
    candidate.score.project_relevance = compute_project_relevance(&candidate.projects, vocabulary);
    candidate.score.overall_score = compute_overall_score(
        candidate.score.skill_match,
        candidate.score.project_relevance,
        candidate.experience_years,
        weights,
    );
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
