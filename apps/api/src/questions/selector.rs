//! Question selection: picks MCQs from the static bank for a skill vocabulary.
//!
//! The random source is a parameter so callers choose between `thread_rng()`
//! in handlers and a seeded `StdRng` in tests.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::question::{Difficulty, Mcq};
use crate::parsing::fields::title_case;
use crate::questions::bank::{
    general_questions, questions_for, skill_entries, QuestionTemplate, GENERAL_CATEGORY, GENERAL_KEY,
};

/// Selects up to `count` questions for `skills`.
///
/// Each distinct skill gets a quota of `max(1, count / skills)` questions,
/// visited in random order. Remaining slots are backfilled from the general
/// pool. The final set is shuffled and renumbered from 1.
pub fn generate_questions<R: Rng + ?Sized>(
    rng: &mut R,
    skills: &[String],
    count: usize,
    difficulty: Difficulty,
) -> Vec<Mcq> {
    if count == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut normalized: Vec<String> = skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect();

    if normalized.is_empty() {
        return general_selection(rng, count, difficulty, 1, &HashSet::new());
    }

    normalized.shuffle(rng);
    let quota = (count / normalized.len()).max(1);

    let mut selected: Vec<Mcq> = Vec::with_capacity(count);
    let mut used: HashSet<&'static str> = HashSet::new();

    for skill in &normalized {
        if selected.len() >= count {
            break;
        }
        let unused = matching_templates(skill)
            .into_iter()
            .filter(|t| !used.contains(t.question))
            .collect();
        let mut pool = filter_by_difficulty(unused, difficulty);
        if pool.is_empty() {
            continue;
        }

        pool.shuffle(rng);
        let category = title_case(skill);
        let take = quota.min(count - selected.len());
        for template in pool.into_iter().take(take) {
            used.insert(template.question);
            selected.push(template.to_mcq(next_id(&selected), &category));
        }
    }

    if selected.len() < count {
        let start_id = next_id(&selected);
        let backfill = general_selection(rng, count - selected.len(), difficulty, start_id, &used);
        debug!("Backfilling {} general questions", backfill.len());
        selected.extend(backfill);
    }

    selected.shuffle(rng);
    selected.truncate(count);
    for (position, mcq) in selected.iter_mut().enumerate() {
        mcq.id = position as u32 + 1;
    }
    selected
}

/// Bank templates for a normalized skill: exact key first, otherwise every
/// skill-specific key containing or contained in the skill.
fn matching_templates(skill: &str) -> Vec<&'static QuestionTemplate> {
    if let Some(templates) = questions_for(skill).filter(|_| skill != GENERAL_KEY) {
        return templates.iter().collect();
    }
    skill_entries()
        .filter(|(key, _)| key.contains(skill) || skill.contains(*key))
        .flat_map(|(_, templates)| templates.iter())
        .collect()
}

/// Keeps templates admitted by `difficulty`; the unfiltered pool when none are.
fn filter_by_difficulty(
    pool: Vec<&'static QuestionTemplate>,
    difficulty: Difficulty,
) -> Vec<&'static QuestionTemplate> {
    let filtered: Vec<_> = pool
        .iter()
        .copied()
        .filter(|t| difficulty.admits(t.difficulty))
        .collect();
    if filtered.is_empty() {
        pool
    } else {
        filtered
    }
}

fn general_selection<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    difficulty: Difficulty,
    start_id: u32,
    used: &HashSet<&'static str>,
) -> Vec<Mcq> {
    let unused = general_questions()
        .iter()
        .filter(|t| !used.contains(t.question))
        .collect();
    let mut pool = filter_by_difficulty(unused, difficulty);
    pool.shuffle(rng);
    pool.into_iter()
        .take(count)
        .zip(start_id..)
        .map(|(template, id)| template.to_mcq(id, GENERAL_CATEGORY))
        .collect()
}

fn next_id(selected: &[Mcq]) -> u32 {
    selected.len() as u32 + 1
}
