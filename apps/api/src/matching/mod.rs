// Screening engine: job vocabulary, scoring, ranking and gap analysis.
// Skill detection goes through the SkillMatcher trait held in AppState.

pub mod gap;
pub mod handlers;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod skills;
