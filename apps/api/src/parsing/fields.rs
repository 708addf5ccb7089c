//! Field extraction: contact details, experience and project statements
//! pulled from raw resume text with fixed patterns.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::candidate::NOT_PROVIDED;

/// Project statements kept per resume.
pub const MAX_PROJECTS: usize = 5;
/// Cap on action-verb occurrences counted across a resume.
pub const MAX_PROJECT_MENTIONS: u32 = 15;
/// Minimum trimmed length for a line to count as a project statement.
const MIN_PROJECT_LINE_LEN: usize = 20;

const PROJECT_LINE_KEYWORDS: &[&str] = &[
    "project",
    "built",
    "developed",
    "created",
    "implemented",
    "designed",
];

/// Action verbs and the weight of each whole-word occurrence.
const PROJECT_COUNT_KEYWORDS: &[(&str, usize)] = &[
    ("project", 1),
    ("developed", 2),
    ("built", 1),
    ("created", 1),
    ("implemented", 1),
    ("designed", 1),
    ("programmed", 1),
    ("coded", 1),
    ("engineered", 1),
];

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid email regex")
});

/// Tried in order: separated/parenthesised, country-code prefixed, bare digits.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}",
        r"\+?[0-9]{1,4}[-.\s]?[0-9]{10}",
        r"[0-9]{10}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid phone regex"))
    .collect()
});

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)",
        r"(\d+)\+?\s*(?:years?|yrs?)",
        r"experience\s*:?\s*(\d+)\s*(?:years?|yrs?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid experience regex"))
    .collect()
});

static PROJECT_COUNT_PATTERNS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    PROJECT_COUNT_KEYWORDS
        .iter()
        .map(|(kw, weight)| {
            let re = Regex::new(&format!(r"\b{kw}\b")).expect("valid keyword regex");
            (re, *weight)
        })
        .collect()
});

/// First email address in the text, or "Not provided".
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_PROVIDED.to_string())
}

/// First phone number matched by the highest-priority pattern that matches
/// anything, or "Not provided".
pub fn extract_phone(text: &str) -> String {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_PROVIDED.to_string())
}

/// Largest "N years" figure found by any experience pattern, or 0.
pub fn extract_experience_years(text: &str) -> u32 {
    let lower = text.to_lowercase();
    EXPERIENCE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(&lower))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Lines that mention an action verb and carry enough text to describe
/// something, first `MAX_PROJECTS` in document order.
pub fn extract_projects(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| {
            let lower = line.to_lowercase();
            PROJECT_LINE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_PROJECT_LINE_LEN)
        .take(MAX_PROJECTS)
        .map(String::from)
        .collect()
}

/// Weighted whole-word occurrences of project action verbs, summed and capped.
pub fn count_project_mentions(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let total: usize = PROJECT_COUNT_PATTERNS
        .iter()
        .map(|(re, weight)| re.find_iter(&lower).count() * weight)
        .sum();
    (total as u32).min(MAX_PROJECT_MENTIONS)
}

/// Display name from a file name: stem, separators to spaces, title case.
pub fn candidate_name_from_file(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    title_case(&stem.replace(['_', '-'], " "))
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        jane.doe@example.com | (555) 123-4567\n\
        Summary: 3 years of experience in backend development\n\
        Work history: 6+ years with Python\n\
        Projects\n\
        Developed a payment service using Flask, cutting latency by 40%\n\
        Built a CLI\n\
        Designed an internal analytics dashboard in React\n";

    #[test]
    fn test_email_first_match() {
        assert_eq!(extract_email(RESUME), "jane.doe@example.com");
        assert_eq!(
            extract_email("a@b.io and second@example.org"),
            "a@b.io"
        );
    }

    #[test]
    fn test_email_missing_is_sentinel() {
        assert_eq!(extract_email("no contact here"), NOT_PROVIDED);
    }

    #[test]
    fn test_phone_prefers_formatted_pattern() {
        assert_eq!(extract_phone(RESUME), "(555) 123-4567");
    }

    #[test]
    fn test_phone_bare_digits() {
        assert_eq!(extract_phone("Mobile: 9876543210"), "9876543210");
    }

    #[test]
    fn test_phone_missing_is_sentinel() {
        assert_eq!(extract_phone("Phone: 12345"), NOT_PROVIDED);
    }

    #[test]
    fn test_experience_takes_maximum() {
        assert_eq!(extract_experience_years(RESUME), 6);
    }

    #[test]
    fn test_experience_labelled() {
        assert_eq!(extract_experience_years("Experience: 4 yrs"), 4);
    }

    #[test]
    fn test_experience_defaults_to_zero() {
        assert_eq!(extract_experience_years("Fresh graduate, eager to learn"), 0);
    }

    #[test]
    fn test_projects_require_keyword_and_length() {
        let projects = extract_projects(RESUME);
        assert_eq!(
            projects,
            vec![
                "Developed a payment service using Flask, cutting latency by 40%".to_string(),
                "Designed an internal analytics dashboard in React".to_string(),
            ]
        );
    }

    #[test]
    fn test_projects_capped_at_five_in_order() {
        let text: String = (1..=8)
            .map(|i| format!("Implemented feature number {i} for the billing platform\n"))
            .collect();
        let projects = extract_projects(&text);
        assert_eq!(projects.len(), MAX_PROJECTS);
        assert!(projects[0].contains("number 1 "));
        assert!(projects[4].contains("number 5 "));
    }

    #[test]
    fn test_project_mentions_whole_word_only() {
        // "projects" and "rebuilt" are not whole-word hits.
        let text = "Project lead. Built and coded tools. Engineered pipelines. Many projects, rebuilt twice.";
        assert_eq!(count_project_mentions(text), 4);
    }

    #[test]
    fn test_developed_counts_twice() {
        assert_eq!(count_project_mentions("Developed a billing service"), 2);
        assert_eq!(count_project_mentions("Developed it, then built and developed more"), 5);
    }

    #[test]
    fn test_project_mentions_capped() {
        let text = "built ".repeat(40);
        assert_eq!(count_project_mentions(&text), MAX_PROJECT_MENTIONS);
    }

    #[test]
    fn test_candidate_name_from_file() {
        assert_eq!(candidate_name_from_file("jane_doe-resume.pdf"), "Jane Doe Resume");
        assert_eq!(candidate_name_from_file("JOHN_SMITH.docx"), "John Smith");
    }

    #[test]
    fn test_title_case_restarts_after_non_letters() {
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("machine learning"), "Machine Learning");
    }
}
