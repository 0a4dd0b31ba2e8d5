// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SummarizerError};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "SUMMARIZER";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub summarizer: SummarizerConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub default_sentences: usize,
    pub max_sentences: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
    /// Adds cosine similarity against the mean sentence vector to each score.
    pub use_similarity: bool,
    pub extra_stopwords_path: Option<PathBuf>,
    pub slow_threshold_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub default_language: String,
    /// When false, only `allowed_languages` are translated.
    pub translate_all_languages: bool,
    pub allowed_languages: Vec<String>,
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub attempt_timeout_ms: u64,
    /// Return the untranslated summary with a warning instead of failing.
    pub fallback_to_untranslated: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            default_sentences: 3,
            max_sentences: 50,
            ngram_min: 1,
            ngram_max: 3,
            use_similarity: true,
            extra_stopwords_path: None,
            slow_threshold_ms: 500,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "http://127.0.0.1:5001".to_string(),
            api_key: None,
            default_language: "en".to_string(),
            translate_all_languages: true,
            allowed_languages: vec!["hi".to_string(), "mr".to_string()],
            max_attempts: 3,
            initial_backoff_ms: 200,
            max_backoff_ms: 2_000,
            attempt_timeout_ms: 10_000,
            fallback_to_untranslated: false,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TranslationConfig {
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("translation.allowed_languages")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SummarizerError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SummarizerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_port(self.server.port)
            .map_err(|e| SummarizerError::Config(e.to_string()))?;

        let summarizer = &self.summarizer;
        if summarizer.max_sentences == 0 {
            return Err(SummarizerError::Config(
                "max_sentences must be greater than 0".to_string(),
            ));
        }

        if summarizer.default_sentences > summarizer.max_sentences {
            return Err(SummarizerError::Config(format!(
                "default_sentences ({}) exceeds max_sentences ({})",
                summarizer.default_sentences, summarizer.max_sentences
            )));
        }

        if summarizer.ngram_min == 0 || summarizer.ngram_min > summarizer.ngram_max {
            return Err(SummarizerError::Config(format!(
                "invalid ngram range ({}, {})",
                summarizer.ngram_min, summarizer.ngram_max
            )));
        }

        let translation = &self.translation;
        if translation.max_attempts == 0 {
            return Err(SummarizerError::Config(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        if translation.attempt_timeout_ms == 0 {
            return Err(SummarizerError::Config(
                "attempt_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Validator::validate_language_code(&translation.default_language)
            .map_err(|e| SummarizerError::Config(e.to_string()))?;

        if translation.enabled {
            Validator::validate_url(&translation.endpoint)
                .map_err(|e| SummarizerError::Config(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Config::load reads process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvVars(Vec<&'static str>);

    impl EnvVars {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                // SAFETY: every test touching the environment holds ENV_LOCK
                unsafe { std::env::set_var(key, value) };
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for key in &self.0 {
                // SAFETY: see EnvVars::set
                unsafe { std::env::remove_var(key) };
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.summarizer.default_sentences, 3);
        assert_eq!(config.translation.default_language, "en");
        assert_eq!(config.translation.max_attempts, 3);
        assert!(config.translation.translate_all_languages);
        assert!(!config.translation.fallback_to_untranslated);
    }

    #[test]
    fn test_load_partial_toml() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summarizer.toml");
        fs::write(
            &path,
            r#"
[server]
port = 8088

[translation]
translate_all_languages = false
allowed_languages = ["hi", "mr", "fr"]
fallback_to_untranslated = true
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.summarizer.ngram_max, 3);
        assert!(!config.translation.translate_all_languages);
        assert_eq!(config.translation.allowed_languages.len(), 3);
        assert!(config.translation.fallback_to_untranslated);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summarizer.toml");
        fs::write(
            &path,
            r#"
[server]
port = 8088

[translation]
allowed_languages = ["fr"]
"#,
        )
        .unwrap();

        let _env = EnvVars::set(&[
            ("SUMMARIZER__SERVER__PORT", "9099"),
            ("SUMMARIZER__TRANSLATION__ALLOWED_LANGUAGES", "hi,mr"),
        ]);

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9099);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.translation.allowed_languages, vec!["hi", "mr"]);
    }

    #[test]
    fn test_validate_rejects_bad_ngram_range() {
        let mut config = Config::default_config();
        config.summarizer.ngram_min = 3;
        config.summarizer.ngram_max = 1;
        assert!(config.validate().is_err());

        config.summarizer.ngram_min = 0;
        config.summarizer.ngram_max = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = Config::default_config();
        config.translation.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_default_above_max() {
        let mut config = Config::default_config();
        config.summarizer.default_sentences = 10;
        config.summarizer.max_sentences = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_only_checked_when_enabled() {
        let mut config = Config::default_config();
        config.translation.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.translation.enabled = false;
        assert!(config.validate().is_ok());
    }
}
