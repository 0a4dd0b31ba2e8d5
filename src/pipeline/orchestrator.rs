// file: src/pipeline/orchestrator.rs
// description: validates a summary request, runs the summarizer and applies translation
// reference: one request in, one summary or one typed error out

use crate::config::Config;
use crate::error::{Result, SummarizerError};
use crate::summarizer::{Summarizer, SummaryDetail};
use crate::translation::{
    LibreTranslateClient, RetryPolicy, Translate, TranslationDecision, TranslationPolicy,
};
use crate::utils::{OperationTimer, Validator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct SummaryRequest {
    pub text: String,
    pub language: Option<String>,
    pub sentences: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub summary: String,
    /// Language the summary is delivered in.
    pub language: String,
    pub translated: bool,
    pub warning: Option<String>,
}

pub struct SummaryService {
    summarizer: Arc<Summarizer>,
    translator: Arc<dyn Translate>,
    policy: TranslationPolicy,
    retry: RetryPolicy,
    default_sentences: usize,
    max_sentences: usize,
    fallback_to_untranslated: bool,
    slow_threshold: Duration,
}

impl SummaryService {
    pub fn new(summarizer: Summarizer, translator: Arc<dyn Translate>, config: &Config) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
            translator,
            policy: TranslationPolicy::from_config(&config.translation),
            retry: RetryPolicy::from_config(&config.translation),
            default_sentences: config.summarizer.default_sentences,
            max_sentences: config.summarizer.max_sentences,
            fallback_to_untranslated: config.translation.fallback_to_untranslated,
            slow_threshold: Duration::from_millis(config.summarizer.slow_threshold_ms),
        }
    }

    /// Provisions every resource up front so a broken setup fails before
    /// the service accepts traffic.
    pub fn from_config(config: &Config) -> Result<Self> {
        let summarizer = Summarizer::from_config(&config.summarizer)?;
        let translator = LibreTranslateClient::from_config(&config.translation)?;

        if config.translation.enabled {
            info!(
                "Translation provider {} at {}",
                translator.name(),
                translator.endpoint()
            );
        } else {
            info!("Translation disabled");
        }

        Ok(Self::new(summarizer, Arc::new(translator), config))
    }

    pub async fn summarize(&self, request: SummaryRequest) -> Result<SummaryOutcome> {
        let text = request.text.trim().to_string();
        Validator::validate_text(&text)?;

        let count = request.sentences.unwrap_or(self.default_sentences);
        Validator::validate_sentence_count(count, self.max_sentences)?;

        let language = request
            .language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| self.policy.default_language().to_string());
        Validator::validate_language_code(&language)?;

        let summary = self.extract(text, count).await?.summary;
        if summary.is_empty() {
            return Ok(SummaryOutcome {
                summary,
                language,
                translated: false,
                warning: None,
            });
        }

        match self.policy.decide(&language) {
            TranslationDecision::NotNeeded => Ok(SummaryOutcome {
                summary,
                language,
                translated: false,
                warning: None,
            }),
            TranslationDecision::Skipped(reason) => {
                warn!("{}", reason);
                Ok(self.untranslated(summary, reason))
            }
            TranslationDecision::Translate => self.translate(summary, language).await,
        }
    }

    async fn extract(&self, text: String, count: usize) -> Result<SummaryDetail> {
        let timer = OperationTimer::new("extractive summary");
        let summarizer = Arc::clone(&self.summarizer);

        let detail =
            tokio::task::spawn_blocking(move || summarizer.summarize_detailed(&text, count))
                .await
                .map_err(|e| {
                    SummarizerError::Summarization(format!("summarization task failed: {}", e))
                })??;

        timer.warn_if_slow(self.slow_threshold, "sentence ranking");
        timer.finish_with_count(detail.selected.len());
        Ok(detail)
    }

    async fn translate(&self, summary: String, language: String) -> Result<SummaryOutcome> {
        let timer = OperationTimer::new("translation");

        match self
            .retry
            .translate(self.translator.as_ref(), &summary, &language)
            .await
        {
            Ok(translated) => {
                timer.finish();
                Ok(SummaryOutcome {
                    summary: translated,
                    language,
                    translated: true,
                    warning: None,
                })
            }
            Err(e) if self.fallback_to_untranslated => {
                warn!("{}; returning untranslated summary", e);
                Ok(self.untranslated(
                    summary,
                    format!("{}; summary returned untranslated", e),
                ))
            }
            Err(e) => Err(e),
        }
    }

    fn untranslated(&self, summary: String, warning: String) -> SummaryOutcome {
        SummaryOutcome {
            summary,
            language: self.policy.default_language().to_string(),
            translated: false,
            warning: Some(warning),
        }
    }
}
