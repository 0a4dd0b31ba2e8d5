// file: src/translation/policy.rs
// description: decides whether a summary is sent to the translation provider
// reference: configured default language with all-languages or allow-list scope

use crate::config::TranslationConfig;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageScope {
    /// Every language other than the default is translated.
    All,
    AllowList(HashSet<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationDecision {
    /// The requested language is the default; return the summary as is.
    NotNeeded,
    Translate,
    /// Translation applies but is not available; carries the reason.
    Skipped(String),
}

#[derive(Debug, Clone)]
pub struct TranslationPolicy {
    enabled: bool,
    default_language: String,
    scope: LanguageScope,
}

impl TranslationPolicy {
    pub fn new(enabled: bool, default_language: &str, scope: LanguageScope) -> Self {
        let scope = match scope {
            LanguageScope::All => LanguageScope::All,
            LanguageScope::AllowList(codes) => {
                LanguageScope::AllowList(codes.iter().map(|c| c.to_lowercase()).collect())
            }
        };

        Self {
            enabled,
            default_language: default_language.to_lowercase(),
            scope,
        }
    }

    pub fn from_config(config: &TranslationConfig) -> Self {
        let scope = if config.translate_all_languages {
            LanguageScope::All
        } else {
            LanguageScope::AllowList(config.allowed_languages.iter().cloned().collect())
        };
        Self::new(config.enabled, &config.default_language, scope)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn decide(&self, language: &str) -> TranslationDecision {
        let language = language.to_lowercase();

        if language == self.default_language {
            return TranslationDecision::NotNeeded;
        }

        if !self.enabled {
            return TranslationDecision::Skipped(format!(
                "Translation is disabled; summary returned in '{}'",
                self.default_language
            ));
        }

        match &self.scope {
            LanguageScope::All => TranslationDecision::Translate,
            LanguageScope::AllowList(codes) if codes.contains(&language) => {
                TranslationDecision::Translate
            }
            LanguageScope::AllowList(_) => TranslationDecision::Skipped(format!(
                "Language '{}' is not supported for translation; summary returned in '{}'",
                language, self.default_language
            )),
        }
    }
}

impl Default for TranslationPolicy {
    fn default() -> Self {
        Self::new(true, "en", LanguageScope::All)
    }
}
