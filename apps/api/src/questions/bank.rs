//! Static question bank, keyed by lower-case skill name.
//!
//! Compiled into the binary; nothing mutates it at runtime.

use crate::models::question::Difficulty::{self, Easy, Hard, Medium};
use crate::models::question::Mcq;

/// Bank key of the skill-agnostic pool used for backfill.
pub const GENERAL_KEY: &str = "general";
/// Category shown on questions drawn from the general pool.
pub const GENERAL_CATEGORY: &str = "General Programming";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// 0-based.
    pub correct: usize,
    pub difficulty: Difficulty,
    pub explanation: &'static str,
}

impl QuestionTemplate {
    /// Instantiates the template with a position id and display category.
    pub fn to_mcq(&self, id: u32, category: &str) -> Mcq {
        Mcq {
            id,
            question: self.question.to_string(),
            options: self.options.map(String::from),
            correct: self.correct,
            correct_answer: self.correct + 1,
            difficulty: self.difficulty,
            category: category.to_string(),
            explanation: Some(self.explanation.to_string()).filter(|e| !e.is_empty()),
        }
    }
}

const fn q(
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    difficulty: Difficulty,
    explanation: &'static str,
) -> QuestionTemplate {
    QuestionTemplate {
        question,
        options,
        correct,
        difficulty,
        explanation,
    }
}

const PYTHON: &[QuestionTemplate] = &[
    q(
        "Which Python framework is commonly used for web development?",
        ["Django", "NumPy", "Pandas", "Matplotlib"],
        0,
        Easy,
        "Django is a high-level Python web framework that encourages rapid development.",
    ),
    q(
        "What is the correct way to create a virtual environment in Python?",
        ["python -m venv myenv", "python create venv", "pip install venv", "python venv create"],
        0,
        Medium,
        "The venv module is the standard way to create virtual environments in Python 3.3+.",
    ),
    q(
        "Which of the following is used for data manipulation in Python?",
        ["Flask", "Django", "Pandas", "Requests"],
        2,
        Easy,
        "Pandas is a powerful data manipulation and analysis library for Python.",
    ),
    q(
        "What is a Python decorator?",
        ["A design pattern", "A function that modifies another function", "A data type", "A loop construct"],
        1,
        Hard,
        "Decorators are a way to modify or enhance functions without changing their code.",
    ),
];

const SQL: &[QuestionTemplate] = &[
    q(
        "Which SQL command is used to retrieve data from a database?",
        ["INSERT", "UPDATE", "SELECT", "DELETE"],
        2,
        Easy,
        "SELECT statement is used to query and retrieve data from database tables.",
    ),
    q(
        "What does INNER JOIN do in SQL?",
        [
            "Combines all rows from both tables",
            "Returns only matching rows from both tables",
            "Returns all rows from left table",
            "Deletes matching rows",
        ],
        1,
        Medium,
        "INNER JOIN returns only the rows that have matching values in both tables.",
    ),
    q(
        "Which SQL clause is used to filter results?",
        ["ORDER BY", "GROUP BY", "WHERE", "HAVING"],
        2,
        Easy,
        "WHERE clause is used to filter records based on specified conditions.",
    ),
    q(
        "What is database normalization?",
        ["Backing up data", "Organizing data to reduce redundancy", "Encrypting data", "Indexing tables"],
        1,
        Hard,
        "Normalization is the process of organizing data to minimize redundancy and dependency.",
    ),
];

const JAVASCRIPT: &[QuestionTemplate] = &[
    q(
        "Which method is used to add an element to the end of an array in JavaScript?",
        ["push()", "pop()", "shift()", "unshift()"],
        0,
        Easy,
        "The push() method adds one or more elements to the end of an array.",
    ),
    q(
        "What does \"this\" keyword refer to in JavaScript?",
        ["The current function", "The global object", "The calling object", "The parent object"],
        2,
        Medium,
        "The \"this\" keyword refers to the object that is calling the function.",
    ),
    q(
        "What is a closure in JavaScript?",
        ["A loop construct", "A function with access to outer scope", "A data type", "An error handler"],
        1,
        Hard,
        "A closure gives you access to an outer function's scope from an inner function.",
    ),
];

const GIT: &[QuestionTemplate] = &[
    q(
        "What is the purpose of \"git clone\" command?",
        ["Create a new branch", "Copy a repository", "Merge branches", "Delete repository"],
        1,
        Easy,
        "git clone creates a copy of a remote repository on your local machine.",
    ),
    q(
        "Which command is used to stage changes in Git?",
        ["git commit", "git push", "git add", "git pull"],
        2,
        Easy,
        "git add stages changes for the next commit.",
    ),
    q(
        "What does \"git rebase\" do?",
        ["Creates a backup", "Rewrites commit history", "Deletes branches", "Merges conflicts"],
        1,
        Hard,
        "git rebase moves or combines commits to create a cleaner project history.",
    ),
];

const DOCKER: &[QuestionTemplate] = &[
    q(
        "What is Docker primarily used for?",
        ["Version control", "Containerization", "Database management", "Web hosting"],
        1,
        Easy,
        "Docker is a platform for developing, shipping, and running applications in containers.",
    ),
    q(
        "Which file is used to define Docker container configuration?",
        ["docker.json", "Dockerfile", "container.yml", "docker.config"],
        1,
        Medium,
        "Dockerfile contains instructions for building Docker images.",
    ),
    q(
        "What is the difference between Docker image and container?",
        [
            "No difference",
            "Image is running instance, container is template",
            "Container is running instance, image is template",
            "Both are the same thing",
        ],
        2,
        Medium,
        "An image is a template, while a container is a running instance of that image.",
    ),
];

const AWS: &[QuestionTemplate] = &[
    q(
        "What does EC2 stand for in AWS?",
        [
            "Elastic Compute Cloud",
            "Enhanced Computing Center",
            "Extended Cloud Computing",
            "Elastic Container Cloud",
        ],
        0,
        Easy,
        "EC2 (Elastic Compute Cloud) provides scalable computing capacity in the cloud.",
    ),
    q(
        "Which AWS service is used for object storage?",
        ["EC2", "RDS", "S3", "Lambda"],
        2,
        Easy,
        "S3 (Simple Storage Service) is AWS's object storage service.",
    ),
    q(
        "What is AWS Lambda used for?",
        ["Database hosting", "Serverless computing", "Load balancing", "DNS management"],
        1,
        Medium,
        "AWS Lambda lets you run code without provisioning or managing servers.",
    ),
];

const REACT: &[QuestionTemplate] = &[
    q(
        "What is JSX in React?",
        [
            "A database",
            "JavaScript XML syntax extension",
            "A testing framework",
            "A state management tool",
        ],
        1,
        Easy,
        "JSX is a syntax extension for JavaScript that looks similar to XML/HTML.",
    ),
    q(
        "What are React hooks?",
        [
            "Event handlers",
            "Functions that let you use state in functional components",
            "CSS classes",
            "HTTP requests",
        ],
        1,
        Medium,
        "Hooks are functions that let you \"hook into\" React state and lifecycle features.",
    ),
];

const NODE_JS: &[QuestionTemplate] = &[
    q(
        "What is Node.js?",
        [
            "A database",
            "JavaScript runtime built on Chrome's V8 engine",
            "A web browser",
            "A CSS framework",
        ],
        1,
        Easy,
        "Node.js is a JavaScript runtime that allows you to run JavaScript on the server side.",
    ),
    q(
        "What is npm?",
        [
            "Node Package Manager",
            "New Programming Method",
            "Network Protocol Manager",
            "Node Performance Monitor",
        ],
        0,
        Easy,
        "npm is the default package manager for Node.js.",
    ),
];

const GENERAL: &[QuestionTemplate] = &[
    q(
        "What is the main advantage of using version control systems?",
        [
            "Faster code execution",
            "Track changes and collaboration",
            "Reduce file size",
            "Automatic testing",
        ],
        1,
        Easy,
        "Version control systems help track changes, manage collaboration, and maintain code history.",
    ),
    q(
        "Which software development methodology emphasizes iterative development?",
        ["Waterfall", "Agile", "Sequential", "Linear"],
        1,
        Easy,
        "Agile methodology focuses on iterative development and customer collaboration.",
    ),
    q(
        "What does API stand for?",
        [
            "Application Programming Interface",
            "Advanced Programming Integration",
            "Automated Process Integration",
            "Application Process Interface",
        ],
        0,
        Easy,
        "API defines how different software components should interact with each other.",
    ),
    q(
        "What is the purpose of unit testing?",
        [
            "Test entire application",
            "Test individual components",
            "Test user interface",
            "Test database connections",
        ],
        1,
        Medium,
        "Unit testing involves testing individual components or modules in isolation.",
    ),
    q(
        "Which of the following is a NoSQL database?",
        ["MySQL", "PostgreSQL", "MongoDB", "SQLite"],
        2,
        Easy,
        "MongoDB is a document-based NoSQL database.",
    ),
    q(
        "What is the difference between frontend and backend development?",
        [
            "No difference",
            "Frontend is client-side, backend is server-side",
            "Frontend is harder",
            "Backend is visual",
        ],
        1,
        Easy,
        "Frontend deals with user interface, backend handles server-side logic and data.",
    ),
];

/// Every bank entry in lookup order. Skill-specific keys first, `general` last.
pub const QUESTION_BANK: &[(&str, &[QuestionTemplate])] = &[
    ("python", PYTHON),
    ("sql", SQL),
    ("javascript", JAVASCRIPT),
    ("git", GIT),
    ("docker", DOCKER),
    ("aws", AWS),
    ("react", REACT),
    ("node.js", NODE_JS),
    (GENERAL_KEY, GENERAL),
];

/// Exact-key lookup.
pub fn questions_for(key: &str) -> Option<&'static [QuestionTemplate]> {
    QUESTION_BANK
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, templates)| *templates)
}

/// Skill-specific entries, without the general pool.
pub fn skill_entries() -> impl Iterator<Item = (&'static str, &'static [QuestionTemplate])> {
    QUESTION_BANK
        .iter()
        .copied()
        .filter(|(key, _)| *key != GENERAL_KEY)
}

pub fn general_questions() -> &'static [QuestionTemplate] {
    GENERAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bank_sizes() {
        let sizes: Vec<(&str, usize)> = QUESTION_BANK.iter().map(|(k, t)| (*k, t.len())).collect();
        assert_eq!(
            sizes,
            vec![
                ("python", 4),
                ("sql", 4),
                ("javascript", 3),
                ("git", 3),
                ("docker", 3),
                ("aws", 3),
                ("react", 2),
                ("node.js", 2),
                ("general", 6),
            ]
        );
    }

    #[test]
    fn test_templates_are_well_formed() {
        for (key, templates) in QUESTION_BANK {
            for t in *templates {
                assert!(t.correct < 4, "{key}: '{}' has out-of-range answer", t.question);
                assert!(!t.question.is_empty());
                let distinct: HashSet<&str> = t.options.iter().copied().collect();
                assert_eq!(distinct.len(), 4, "{key}: '{}' repeats an option", t.question);
            }
        }
    }

    #[test]
    fn test_keys_are_unique_lowercase() {
        let keys: HashSet<&str> = QUESTION_BANK.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), QUESTION_BANK.len());
        assert!(keys.iter().all(|k| *k == k.to_lowercase()));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(questions_for("python").map(<[_]>::len), Some(4));
        assert!(questions_for("Python").is_none());
        assert!(questions_for("cobol").is_none());
        assert_eq!(general_questions().len(), 6);
        assert!(skill_entries().all(|(k, _)| k != GENERAL_KEY));
    }

    #[test]
    fn test_to_mcq_fills_display_fields() {
        let mcq = SQL[0].to_mcq(7, "Sql");
        assert_eq!(mcq.id, 7);
        assert_eq!(mcq.category, "Sql");
        assert_eq!(mcq.correct, 2);
        assert_eq!(mcq.correct_answer, 3);
        assert_eq!(mcq.options[2], "SELECT");
        assert_eq!(mcq.answer_letter(), 'C');
        assert!(mcq.explanation.is_some());
    }
}
