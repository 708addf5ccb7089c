use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel stored in contact fields when nothing could be extracted.
pub const NOT_PROVIDED: &str = "Not provided";

/// `raw_text` marker carried by placeholder records for unreadable files.
pub const PARSE_FAILURE_MARKER: &str = "Failed to parse resume";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: NOT_PROVIDED.to_string(),
            phone: NOT_PROVIDED.to_string(),
        }
    }
}

/// Seniority bucket derived from the extracted years of experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Fresher,
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    /// 0 → Fresher, 1–2 → Beginner, 3–5 → Intermediate, 6+ → Expert.
    pub fn from_years(years: u32) -> Self {
        match years {
            0 => ExperienceLevel::Fresher,
            1..=2 => ExperienceLevel::Beginner,
            3..=5 => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::Expert,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score fields attached to a candidate. `skill_match` is set at parse time,
/// the other two are filled in by the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateScore {
    pub skill_match: f64,
    pub project_relevance: f64,
    pub overall_score: f64,
}

/// One resume, as extracted from a single uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    /// Always a subset of the vocabulary the resume was matched against.
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub experience_level: ExperienceLevel,
    /// Up to 5 project statements, in document order.
    pub projects: Vec<String>,
    /// Action-verb occurrences across the whole text, capped at 15.
    pub project_count: u32,
    /// `project_count` capped at 10, the figure shown and exported.
    pub projects_count: u32,
    pub file_name: String,
    pub raw_text: String,
    #[serde(flatten)]
    pub score: CandidateScore,
}

impl Candidate {
    /// True for records standing in for files that yielded no text.
    pub fn is_placeholder(&self) -> bool {
        self.raw_text == PARSE_FAILURE_MARKER
    }
}
