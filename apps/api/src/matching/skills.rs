//! Skill extraction: pluggable, trait-based matcher that finds vocabulary
//! skills in free text.
//!
//! Default: `KeywordSkillMatcher` (whole-word, case-insensitive regex match).
//! `AppState` holds an `Arc<dyn SkillMatcher>`, so a semantic matcher can be
//! swapped in without touching scoring or ranking.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────
// Keyword lists
// ────────────────────────────────────────────────────────────────────────────

/// Technical keywords checked in a resume when no job vocabulary is supplied.
pub const DEFAULT_SKILL_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "react", "node.js", "sql", "mongodb",
    "html", "css", "git", "docker", "kubernetes", "aws", "azure", "gcp",
    "machine learning", "data science", "tensorflow", "pytorch", "flask",
    "django", "express", "angular", "vue", "typescript", "c++", "c#",
    "php", "ruby", "go", "rust", "scala", "kotlin", "swift", "mysql",
    "postgresql", "redis", "elasticsearch", "jenkins", "terraform",
    "ansible", "linux", "unix", "bash", "powershell", "api", "rest",
    "graphql", "microservices", "devops", "ci/cd", "agile", "scrum",
    "springboot", "spring", "hibernate", "jpa", "maven", "gradle",
    "junit", "mockito", "selenium", "postman", "swagger", "json",
    "xml", "yaml", "nosql", "firebase", "heroku", "netlify", "vercel",
    "bootstrap", "tailwind", "sass", "webpack", "npm", "yarn", "vite",
];

/// Extra terms only looked for in job descriptions.
const JOB_EXTRA_KEYWORDS: &[&str] = &[
    "rest api",
    "restful",
    "oauth",
    "jwt",
    "authentication",
    "authorization",
];

const AI_TITLE_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "nlp",
    "computer vision",
    "deep learning",
];
const DATA_TITLE_KEYWORDS: &[&str] = &["pandas", "numpy", "matplotlib", "seaborn", "jupyter", "r"];
const DEVOPS_TITLE_KEYWORDS: &[&str] = &["ci/cd", "monitoring", "logging", "infrastructure"];

/// Whole-word patterns for every built-in keyword, compiled once.
static KEYWORD_PATTERNS: Lazy<HashMap<String, Regex>> = Lazy::new(|| {
    DEFAULT_SKILL_KEYWORDS
        .iter()
        .chain(JOB_EXTRA_KEYWORDS)
        .chain(AI_TITLE_KEYWORDS)
        .chain(DATA_TITLE_KEYWORDS)
        .chain(DEVOPS_TITLE_KEYWORDS)
        .filter_map(|kw| compile_keyword(kw).map(|re| (kw.to_string(), re)))
        .collect()
});

// ────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// Skill keywords derived from one job description. De-duplicated
/// case-insensitively; blank entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillVocabulary(Vec<String>);

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(Into::into)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
            .collect();
        SkillVocabulary(skills)
    }

    /// The resume-side fallback vocabulary.
    pub fn default_keywords() -> Self {
        Self::new(DEFAULT_SKILL_KEYWORDS.iter().copied())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for SkillVocabulary {
    fn from(skills: Vec<String>) -> Self {
        Self::new(skills)
    }
}

impl From<SkillVocabulary> for Vec<String> {
    fn from(vocabulary: SkillVocabulary) -> Self {
        vocabulary.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Finds which vocabulary skills a text mentions. Implementations must only
/// ever return entries of `vocabulary`, each at most once.
pub trait SkillMatcher: Send + Sync {
    fn extract(&self, text: &str, vocabulary: &[String]) -> Vec<String>;

    /// Label of the matching strategy, for logs and reports.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Whole-word keyword matcher. "java" does not match inside "javascript",
/// multi-word skills must appear as the full phrase.
pub struct KeywordSkillMatcher;

impl SkillMatcher for KeywordSkillMatcher {
    fn extract(&self, text: &str, vocabulary: &[String]) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut seen = HashSet::new();
        vocabulary
            .iter()
            .filter(|skill| contains_keyword(&text_lower, skill))
            .filter(|skill| seen.insert(skill.to_lowercase()))
            .cloned()
            .collect()
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Whole-word test of `keyword` against already lower-cased text.
fn contains_keyword(text_lower: &str, keyword: &str) -> bool {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return false;
    }
    match KEYWORD_PATTERNS.get(&keyword) {
        Some(re) => re.is_match(text_lower),
        None => compile_keyword(&keyword).is_some_and(|re| re.is_match(text_lower)),
    }
}

fn compile_keyword(keyword: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .map_err(|e| debug!("Skipping keyword '{keyword}': {e}"))
        .ok()
}

// ────────────────────────────────────────────────────────────────────────────
// Job-side extraction
// ────────────────────────────────────────────────────────────────────────────

/// Keyword list for a job, widened by the first title rule that applies.
fn job_keywords(job_title: Option<&str>) -> Vec<String> {
    let mut keywords: Vec<&str> = DEFAULT_SKILL_KEYWORDS
        .iter()
        .chain(JOB_EXTRA_KEYWORDS)
        .copied()
        .collect();

    if let Some(title) = job_title {
        let title_lower = title.to_lowercase();
        if title_lower.contains("ai") || title_lower.contains("artificial intelligence") {
            keywords.extend(AI_TITLE_KEYWORDS);
        } else if title_lower.contains("data") {
            keywords.extend(DATA_TITLE_KEYWORDS);
        } else if title_lower.contains("devops") {
            keywords.extend(DEVOPS_TITLE_KEYWORDS);
        }
    }

    keywords.into_iter().map(String::from).collect()
}

/// Derives the skill vocabulary of a job description. Blank descriptions
/// yield an empty vocabulary.
pub fn extract_job_skills(
    matcher: &dyn SkillMatcher,
    job_description: &str,
    job_title: Option<&str>,
) -> SkillVocabulary {
    if job_description.trim().is_empty() {
        return SkillVocabulary::default();
    }
    let keywords = job_keywords(job_title);
    SkillVocabulary::new(matcher.extract(job_description, &keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_whole_word_only() {
        let found = KeywordSkillMatcher.extract(
            "Senior JavaScript engineer",
            &vocab(&["java", "javascript"]),
        );
        assert_eq!(found, vec!["javascript".to_string()]);
    }

    #[test]
    fn test_case_insensitive_phrase_match() {
        let found = KeywordSkillMatcher.extract(
            "Hands-on MACHINE LEARNING and Node.js",
            &vocab(&["machine learning", "node.js", "learning machine"]),
        );
        assert_eq!(found, vocab(&["machine learning", "node.js"]));
    }

    #[test]
    fn test_punctuated_keywords() {
        let found = KeywordSkillMatcher.extract(
            "Pipelines with CI/CD, services in C# and Go.",
            &vocab(&["ci/cd", "c#", "go", "rust"]),
        );
        assert_eq!(found, vocab(&["ci/cd", "go"]));
    }

    #[test]
    fn test_builtin_keywords_precompiled() {
        for keyword in ["c++", "ci/cd", "node.js", "rest api", "r"] {
            assert!(KEYWORD_PATTERNS.contains_key(keyword), "{keyword}");
        }
        // Custom vocabulary entries are compiled on demand.
        assert!(!KEYWORD_PATTERNS.contains_key("fastapi"));
        let found = KeywordSkillMatcher.extract(
            "Shipped FastAPI services with Redis",
            &vocab(&["FastAPI", "redis", "go"]),
        );
        assert_eq!(found, vocab(&["FastAPI", "redis"]));
    }

    #[test]
    fn test_result_is_subset_of_vocabulary() {
        let vocabulary = vocab(&["python", "sql", "docker"]);
        let found = KeywordSkillMatcher.extract("python sql kubernetes aws python", &vocabulary);
        assert!(found.iter().all(|s| vocabulary.contains(s)));
        assert_eq!(found, vocab(&["python", "sql"]));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let vocabulary = vocab(&["python", "flask", "redis"]);
        let text = "Flask APIs backed by Redis, written in Python";
        let first = KeywordSkillMatcher.extract(text, &vocabulary);
        let second = KeywordSkillMatcher.extract(text, &vocabulary);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_vocabulary_yields_nothing() {
        assert!(KeywordSkillMatcher.extract("python everywhere", &[]).is_empty());
    }

    #[test]
    fn test_duplicate_vocabulary_entries_reported_once() {
        let found = KeywordSkillMatcher.extract("Python", &vocab(&["python", "Python"]));
        assert_eq!(found, vocab(&["python"]));
    }

    #[test]
    fn test_vocabulary_dedups_case_insensitively() {
        let v = SkillVocabulary::new(["Python", "python", " sql ", "", "SQL"]);
        assert_eq!(v.as_slice(), &vocab(&["Python", "sql"])[..]);
    }

    #[test]
    fn test_vocabulary_deserializes_through_dedup() {
        let v: SkillVocabulary = serde_json::from_str(r#"["aws", "AWS", "git"]"#).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"["aws","git"]"#);
    }

    #[test]
    fn test_job_skills_include_job_only_terms() {
        let v = extract_job_skills(
            &KeywordSkillMatcher,
            "Build a RESTful service with OAuth and JWT in Python",
            None,
        );
        for expected in ["python", "restful", "oauth", "jwt"] {
            assert!(v.iter().any(|s| s == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_ai_title_adds_ai_vocabulary() {
        let jd = "Work on NLP and deep learning models in PyTorch";
        let without = extract_job_skills(&KeywordSkillMatcher, jd, None);
        let with = extract_job_skills(&KeywordSkillMatcher, jd, Some("Junior AI Engineer"));
        assert!(!without.iter().any(|s| s == "nlp"));
        assert!(with.iter().any(|s| s == "nlp"));
        assert!(with.iter().any(|s| s == "deep learning"));
        assert!(with.iter().any(|s| s == "pytorch"));
    }

    #[test]
    fn test_data_title_adds_data_vocabulary() {
        let v = extract_job_skills(
            &KeywordSkillMatcher,
            "Analysis with pandas and numpy",
            Some("Data Analyst"),
        );
        assert!(v.iter().any(|s| s == "pandas"));
        assert!(v.iter().any(|s| s == "numpy"));
    }

    #[test]
    fn test_devops_title_adds_devops_vocabulary() {
        let v = extract_job_skills(
            &KeywordSkillMatcher,
            "Own monitoring and logging for our infrastructure",
            Some("DevOps Engineer"),
        );
        assert_eq!(v.as_slice(), &vocab(&["monitoring", "logging", "infrastructure"])[..]);
    }

    #[test]
    fn test_blank_job_description_yields_empty_vocabulary() {
        assert!(extract_job_skills(&KeywordSkillMatcher, "   \n", Some("AI Engineer")).is_empty());
    }
}
