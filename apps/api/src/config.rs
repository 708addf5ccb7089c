use anyhow::{Context, Result};

const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_UPLOAD_FILES: usize = 50;
const DEFAULT_QUESTION_COUNT: usize = 10;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Per-file upload cap.
    pub max_file_size_bytes: usize,
    /// Resumes accepted in one screening batch.
    pub max_upload_files: usize,
    pub default_question_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            max_upload_files: DEFAULT_MAX_UPLOAD_FILES,
            default_question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_file_size_bytes: parse_env("MAX_FILE_SIZE_BYTES", defaults.max_file_size_bytes)?,
            max_upload_files: parse_env("MAX_UPLOAD_FILES", defaults.max_upload_files)?,
            default_question_count: parse_env("DEFAULT_QUESTION_COUNT", defaults.default_question_count)?,
        })
    }

    /// Body limit for multipart uploads: every file at its cap, plus form fields.
    pub fn max_request_bytes(&self) -> usize {
        self.max_file_size_bytes
            .saturating_mul(self.max_upload_files)
            .saturating_add(1024 * 1024)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_file_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.max_upload_files, 50);
        assert_eq!(config.default_question_count, 10);
    }

    #[test]
    fn test_parse_env_reads_and_validates() {
        std::env::set_var("RECRUITER_TEST_PORT_OK", " 9090 ");
        assert_eq!(parse_env::<u16>("RECRUITER_TEST_PORT_OK", 1).unwrap(), 9090);

        std::env::set_var("RECRUITER_TEST_PORT_BAD", "eighty");
        let err = parse_env::<u16>("RECRUITER_TEST_PORT_BAD", 1).unwrap_err();
        assert!(err.to_string().contains("RECRUITER_TEST_PORT_BAD"));

        assert_eq!(parse_env::<usize>("RECRUITER_TEST_UNSET", 7).unwrap(), 7);
    }

    #[test]
    fn test_request_limit_covers_full_batch() {
        let config = Config::default();
        assert!(config.max_request_bytes() > config.max_file_size_bytes * config.max_upload_files);
    }
}
