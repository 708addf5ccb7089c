use crate::models::question::{option_letter, Mcq};

const TITLE: &str = "INTERVIEW QUESTIONS";
const TITLE_RULE_WIDTH: usize = 50;
const QUESTION_RULE_WIDTH: usize = 30;

/// Plain-text interview sheet. Questions are numbered by position, not by id.
pub fn questions_to_text(questions: &[Mcq]) -> String {
    let mut lines: Vec<String> = vec![TITLE.to_string(), "=".repeat(TITLE_RULE_WIDTH), String::new()];

    for (index, mcq) in questions.iter().enumerate() {
        lines.push(format!("Question {}: {}", index + 1, mcq.question));
        lines.push(String::new());
        for (option_index, option) in mcq.options.iter().enumerate() {
            lines.push(format!("{}. {option}", option_letter(option_index)));
        }
        lines.push(String::new());
        lines.push(format!("Correct Answer: {}", mcq.answer_letter()));
        if let Some(explanation) = mcq.explanation.as_deref().filter(|e| !e.is_empty()) {
            lines.push(format!("Explanation: {explanation}"));
        }
        lines.push(String::new());
        lines.push("-".repeat(QUESTION_RULE_WIDTH));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Difficulty;

    fn mcq(question: &str, correct: usize, explanation: Option<&str>) -> Mcq {
        Mcq {
            id: 9,
            question: question.to_string(),
            options: ["INSERT", "UPDATE", "SELECT", "DELETE"].map(String::from),
            correct,
            correct_answer: correct + 1,
            difficulty: Difficulty::Easy,
            category: "Sql".to_string(),
            explanation: explanation.map(String::from),
        }
    }

    #[test]
    fn test_single_question_layout() {
        let text = questions_to_text(&[mcq(
            "Which SQL command retrieves data?",
            2,
            Some("SELECT queries tables."),
        )]);
        let title_rule = "=".repeat(50);
        let question_rule = "-".repeat(30);
        let expected = [
            "INTERVIEW QUESTIONS",
            title_rule.as_str(),
            "",
            "Question 1: Which SQL command retrieves data?",
            "",
            "A. INSERT",
            "B. UPDATE",
            "C. SELECT",
            "D. DELETE",
            "",
            "Correct Answer: C",
            "Explanation: SELECT queries tables.",
            "",
            question_rule.as_str(),
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_explanation_line_is_optional() {
        let text = questions_to_text(&[mcq("Q?", 0, None)]);
        assert!(text.contains("Correct Answer: A\n\n"));
        assert!(!text.contains("Explanation:"));
    }

    #[test]
    fn test_numbering_follows_position() {
        let text = questions_to_text(&[mcq("First?", 0, None), mcq("Second?", 1, None)]);
        assert!(text.contains("Question 1: First?"));
        assert!(text.contains("Question 2: Second?"));
    }

    #[test]
    fn test_empty_list_has_title_only() {
        assert_eq!(questions_to_text(&[]), format!("INTERVIEW QUESTIONS\n{}\n", "=".repeat(50)));
    }
}
