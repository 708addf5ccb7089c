//! Gap analysis: per-candidate skill coverage, recommendation tier and
//! strengths against a job vocabulary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::scoring::round_to_tenth;
use crate::matching::skills::SkillVocabulary;
use crate::models::candidate::Candidate;

const CRITICAL_MISSING_LIMIT: usize = 3;
const IMPROVEMENT_AREAS_LIMIT: usize = 5;
/// Project statements longer than this count as detailed.
const DETAILED_PROJECT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

impl GapSeverity {
    /// ≥80% coverage → Low, ≥60% → Medium, otherwise High.
    pub fn from_coverage(coverage_pct: f64) -> Self {
        if coverage_pct >= 80.0 {
            GapSeverity::Low
        } else if coverage_pct >= 60.0 {
            GapSeverity::Medium
        } else {
            GapSeverity::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Consider with Caution")]
    ConsiderWithCaution,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl Recommendation {
    /// ≥8 → Highly Recommended, ≥6 → Recommended, ≥4 → Consider with Caution.
    pub fn from_overall_score(overall_score: f64) -> Self {
        if overall_score >= 8.0 {
            Recommendation::HighlyRecommended
        } else if overall_score >= 6.0 {
            Recommendation::Recommended
        } else if overall_score >= 4.0 {
            Recommendation::ConsiderWithCaution
        } else {
            Recommendation::NotRecommended
        }
    }
}

/// Coverage of the job vocabulary by a candidate's skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    /// In [0, 100], rounded to one decimal; 0 for an empty vocabulary.
    pub skill_coverage_percentage: f64,
    pub matched_skills_count: usize,
    pub missing_skills_count: usize,
    pub critical_missing_skills: Vec<String>,
    pub skill_gap_severity: GapSeverity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_projects: usize,
    pub detailed_projects: usize,
    pub project_relevance_score: f64,
    pub has_recent_projects: bool,
}

/// Full per-candidate report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAnalysis {
    pub candidate: Candidate,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_match_percentage: f64,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub project_summary: ProjectSummary,
    pub skill_gap: SkillGap,
}

/// Splits the vocabulary into (matched, missing) against the candidate's
/// skills, case-insensitively, keeping vocabulary order.
fn partition_skills(candidate: &Candidate, vocabulary: &SkillVocabulary) -> (Vec<String>, Vec<String>) {
    let have: HashSet<String> = candidate.skills.iter().map(|s| s.to_lowercase()).collect();
    vocabulary
        .iter()
        .cloned()
        .partition(|skill| have.contains(&skill.to_lowercase()))
}

fn coverage_percentage(matched: usize, vocabulary: &SkillVocabulary) -> f64 {
    if vocabulary.is_empty() {
        return 0.0;
    }
    round_to_tenth(matched as f64 / vocabulary.len() as f64 * 100.0)
}

/// Skill coverage report for one candidate.
pub fn compute_skill_gap(candidate: &Candidate, vocabulary: &SkillVocabulary) -> SkillGap {
    let (matched, missing) = partition_skills(candidate, vocabulary);
    let coverage = coverage_percentage(matched.len(), vocabulary);

    SkillGap {
        skill_coverage_percentage: coverage,
        matched_skills_count: matched.len(),
        missing_skills_count: missing.len(),
        critical_missing_skills: missing.iter().take(CRITICAL_MISSING_LIMIT).cloned().collect(),
        skill_gap_severity: GapSeverity::from_coverage(coverage),
    }
}

/// Rule cascade over experience, projects, skills and overall score.
/// Never empty.
pub fn identify_strengths(candidate: &Candidate) -> Vec<String> {
    let mut strengths = Vec::new();

    if candidate.experience_years >= 5 {
        strengths.push("Extensive experience");
    } else if candidate.experience_years >= 2 {
        strengths.push("Good experience level");
    }

    let relevance = candidate.score.project_relevance;
    if relevance >= 8.0 {
        strengths.push("Strong project portfolio");
    } else if relevance >= 5.0 {
        strengths.push("Decent project experience");
    }

    let skill_match = candidate.score.skill_match;
    if skill_match >= 10.0 {
        strengths.push("Excellent skill alignment");
    } else if skill_match >= 5.0 {
        strengths.push("Good skill match");
    }

    let overall = candidate.score.overall_score;
    if overall >= 8.0 {
        strengths.push("Top performer");
    } else if overall >= 6.0 {
        strengths.push("Strong candidate");
    }

    if strengths.is_empty() {
        strengths.push("Entry-level candidate with potential");
    }

    strengths.into_iter().map(String::from).collect()
}

fn summarize_projects(candidate: &Candidate) -> ProjectSummary {
    ProjectSummary {
        total_projects: candidate.projects.len(),
        detailed_projects: candidate
            .projects
            .iter()
            .filter(|p| p.chars().count() > DETAILED_PROJECT_CHARS)
            .count(),
        project_relevance_score: candidate.score.project_relevance,
        has_recent_projects: !candidate.projects.is_empty(),
    }
}

/// Detailed report for one candidate against the job vocabulary.
pub fn analyze_candidate(candidate: &Candidate, vocabulary: &SkillVocabulary) -> CandidateAnalysis {
    let (matched_skills, missing_skills) = partition_skills(candidate, vocabulary);
    let skill_match_percentage = coverage_percentage(matched_skills.len(), vocabulary);

    CandidateAnalysis {
        candidate: candidate.clone(),
        skill_match_percentage,
        recommendation: Recommendation::from_overall_score(candidate.score.overall_score),
        strengths: identify_strengths(candidate),
        areas_for_improvement: missing_skills
            .iter()
            .take(IMPROVEMENT_AREAS_LIMIT)
            .cloned()
            .collect(),
        project_summary: summarize_projects(candidate),
        skill_gap: compute_skill_gap(candidate, vocabulary),
        matched_skills,
        missing_skills,
    }
}
