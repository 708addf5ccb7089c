use serde::{Deserialize, Serialize};

/// Difficulty tag on a question. `Medium` doubles as "no filtering" when
/// used as a selection filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Whether a question tagged `tag` passes this filter.
    pub fn admits(self, tag: Difficulty) -> bool {
        self == Difficulty::Medium || self == tag
    }
}

/// A multiple-choice interview question ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mcq {
    /// Positional, 1-based. Reassigned after the final shuffle.
    pub id: u32,
    pub question: String,
    pub options: [String; 4],
    /// 0-based index into `options`.
    pub correct: usize,
    /// 1-based index into `options`, for display.
    pub correct_answer: usize,
    pub difficulty: Difficulty,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Mcq {
    /// Letter (A–D) of the correct option.
    pub fn answer_letter(&self) -> char {
        option_letter(self.correct_answer.saturating_sub(1))
    }
}

/// Maps a 0-based option index to its display letter.
pub fn option_letter(index: usize) -> char {
    char::from(b'A' + (index.min(25) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_admits_everything() {
        for tag in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(Difficulty::Medium.admits(tag));
        }
    }

    #[test]
    fn test_hard_filter_only_admits_hard() {
        assert!(Difficulty::Hard.admits(Difficulty::Hard));
        assert!(!Difficulty::Hard.admits(Difficulty::Easy));
        assert!(!Difficulty::Hard.admits(Difficulty::Medium));
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let d: Difficulty = serde_json::from_str(r#""hard""#).unwrap();
        assert_eq!(d, Difficulty::Hard);
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), r#""easy""#);
    }

    #[test]
    fn test_answer_letter_is_one_based() {
        let mcq = Mcq {
            id: 1,
            question: "What does API stand for?".to_string(),
            options: [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct: 2,
            correct_answer: 3,
            difficulty: Difficulty::Easy,
            category: "General Programming".to_string(),
            explanation: None,
        };
        assert_eq!(mcq.answer_letter(), 'C');
        assert_eq!(option_letter(0), 'A');
    }
}
