use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::ScoringWeights;
use crate::matching::skills::{KeywordSkillMatcher, SkillMatcher};
use crate::parsing::text::{DocumentReader, FileTextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill matcher. Default: KeywordSkillMatcher.
    pub skill_matcher: Arc<dyn SkillMatcher>,
    /// Pluggable text extraction backend. Default: FileTextExtractor.
    pub document_reader: Arc<dyn DocumentReader>,
    pub scoring_weights: ScoringWeights,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            skill_matcher: Arc::new(KeywordSkillMatcher),
            document_reader: Arc::new(FileTextExtractor),
            scoring_weights: ScoringWeights::default(),
        }
    }
}
