use anyhow::{Context, Result};

use crate::models::candidate::Candidate;

pub const CSV_HEADER: [&str; 12] = [
    "Rank",
    "Name",
    "Email",
    "Phone",
    "Experience_Years",
    "Experience_Level",
    "Projects_Count",
    "Skill_Match",
    "Project_Relevance",
    "Overall_Score",
    "Skills",
    "File_Name",
];

/// One row per candidate in the given order; rank is the 1-based position.
pub fn candidates_to_csv(candidates: &[Candidate]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (rank, candidate) in candidates.iter().enumerate() {
        writer.write_record([
            (rank + 1).to_string(),
            candidate.name.clone(),
            candidate.contact.email.clone(),
            candidate.contact.phone.clone(),
            candidate.experience_years.to_string(),
            candidate.experience_level.to_string(),
            candidate.projects_count.to_string(),
            format!("{:.0}", candidate.score.skill_match),
            format!("{:.1}", candidate.score.project_relevance),
            format!("{:.1}", candidate.score.overall_score),
            candidate.skills.join("; "),
            candidate.file_name.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV writer: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}
