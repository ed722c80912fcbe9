// src/config.rs

use crate::error::QuizError;
use crate::model::Difficulty;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("data/quiz_config.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    pub api: ApiConfig,
    pub settings: QuizSettings,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub questions_url: String,
    pub categories_url: String,
    pub question_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSettings {
    pub question_counts: Vec<u32>,
    pub default_difficulty: Difficulty,
    pub default_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub history_key: String,
}

impl QuizConfig {
    /// Parses a YAML document and checks that the defaults are consistent.
    pub fn from_yaml(text: &str) -> Result<Self, QuizError> {
        let config: QuizConfig =
            serde_yaml::from_str(text).map_err(|e| QuizError::Config(e.to_string()))?;
        if config.settings.question_counts.is_empty() {
            return Err(QuizError::Config("question_counts is empty".into()));
        }
        if !config
            .settings
            .question_counts
            .contains(&config.settings.default_count)
        {
            return Err(QuizError::Config(format!(
                "default_count {} is not one of {:?}",
                config.settings.default_count, config.settings.question_counts
            )));
        }
        if config.storage.history_key.trim().is_empty() {
            return Err(QuizError::Config("history_key is empty".into()));
        }
        Ok(config)
    }

    /// Embedded configuration with environment overrides applied.
    pub fn load() -> Result<Self, QuizError> {
        let mut config = Self::from_yaml(EMBEDDED_CONFIG)?;
        if let Some(url) = override_var("TRIVIA_API_URL") {
            config.api.questions_url = url;
        }
        if let Some(url) = override_var("TRIVIA_CATEGORIES_URL") {
            config.api.categories_url = url;
        }
        log::debug!(
            "config loaded: questions={} categories={}",
            config.api.questions_url,
            config.api.categories_url
        );
        Ok(config)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn override_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn override_var(name: &str) -> Option<String> {
    let value = match name {
        "TRIVIA_API_URL" => option_env!("TRIVIA_API_URL"),
        "TRIVIA_CATEGORIES_URL" => option_env!("TRIVIA_CATEGORIES_URL"),
        _ => None,
    };
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}
