use std::cmp::Ordering;

use crate::models::candidate::Candidate;

/// Candidates surfaced at the top of a ranked batch.
pub const SHORTLIST_SIZE: usize = 3;

/// Orders candidates best-first by overall score, then project relevance,
/// then skill match, then years of experience. Full ties keep input order.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // `sort_by` is stable, which the tie rule relies on.
    candidates.sort_by(compare_candidates);
    candidates
}

/// Descending comparator over the four ranking keys.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .overall_score
        .total_cmp(&a.score.overall_score)
        .then_with(|| b.score.project_relevance.total_cmp(&a.score.project_relevance))
        .then_with(|| b.score.skill_match.total_cmp(&a.score.skill_match))
        .then_with(|| b.experience_years.cmp(&a.experience_years))
}

/// First `SHORTLIST_SIZE` entries of an already ranked list.
pub fn shortlist(ranked: &[Candidate]) -> Vec<Candidate> {
    ranked.iter().take(SHORTLIST_SIZE).cloned().collect()
}
