// file: src/translation/retry.rs
// description: bounded retry with exponential backoff and per-attempt timeout
// reference: tokio::time based retry loop

use crate::config::TranslationConfig;
use crate::error::{Result, SummarizerError};
use crate::translation::Translate;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(2),
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &TranslationConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
            attempt_timeout: config.attempt_timeout(),
        }
    }

    /// Delay after the given 1-based failed attempt: doubles each time, capped.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    pub async fn translate<T>(&self, translator: &T, text: &str, target: &str) -> Result<String>
    where
        T: Translate + ?Sized,
    {
        let mut last_error = String::from("no attempt made");

        for attempt in 1..=self.max_attempts {
            match timeout(self.attempt_timeout, translator.translate(text, target)).await {
                Ok(Ok(translated)) => {
                    if attempt > 1 {
                        info!(
                            "Translation via {} succeeded on attempt {}",
                            translator.name(),
                            attempt
                        );
                    }
                    return Ok(translated);
                }
                Ok(Err(e)) => {
                    warn!(
                        "Translation attempt {}/{} via {} failed: {}",
                        attempt,
                        self.max_attempts,
                        translator.name(),
                        e
                    );
                    last_error = e.to_string();
                }
                Err(_) => {
                    warn!(
                        "Translation attempt {}/{} via {} timed out after {:?}",
                        attempt,
                        self.max_attempts,
                        translator.name(),
                        self.attempt_timeout
                    );
                    last_error = format!("attempt timed out after {:?}", self.attempt_timeout);
                }
            }

            if attempt < self.max_attempts {
                sleep(self.backoff_for(attempt)).await;
            }
        }

        Err(SummarizerError::Translation {
            attempts: self.max_attempts,
            message: last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FlakyTranslator {
        failures: u32,
        calls: AtomicU32,
    }

    impl FlakyTranslator {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl Translate for FlakyTranslator {
        async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.failures {
                return Err(SummarizerError::Provider(format!("call {} failed", call)));
            }
            Ok(format!("{}:{}", target_language, text))
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    struct StalledTranslator;

    #[async_trait]
    impl Translate for StalledTranslator {
        async fn translate(&self, _text: &str, _target_language: &str) -> Result<String> {
            sleep(Duration::from_secs(30)).await;
            Ok(String::new())
        }

        fn name(&self) -> &str {
            "stalled"
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(4),
            attempt_timeout: Duration::from_millis(50),
        }
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(400));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(800));
        assert_eq!(policy.backoff_for(5), Duration::from_secs(2));
        assert_eq!(policy.backoff_for(64), Duration::from_secs(2));
    }

    #[test]
    fn test_from_config() {
        let config = TranslationConfig {
            max_attempts: 5,
            attempt_timeout_ms: 1500,
            ..TranslationConfig::default()
        };
        let policy = RetryPolicy::from_config(&config);
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.attempt_timeout, Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_succeeds_first_try() {
        let translator = FlakyTranslator::new(0);
        let result = fast_policy().translate(&translator, "hello", "hi").await;
        assert_eq!(result.unwrap(), "hi:hello");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_on_last_attempt() {
        let translator = FlakyTranslator::new(2);
        let result = fast_policy().translate(&translator, "hello", "mr").await;
        assert_eq!(result.unwrap(), "mr:hello");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_three_attempts() {
        let translator = FlakyTranslator::new(u32::MAX);
        let err = fast_policy()
            .translate(&translator, "hello", "hi")
            .await
            .unwrap_err();

        assert_eq!(translator.calls.load(Ordering::SeqCst), 3);
        match err {
            SummarizerError::Translation { attempts, message } => {
                assert_eq!(attempts, 3);
                assert!(message.contains("call 3 failed"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_attempt_timeout_counts_as_failure() {
        let policy = RetryPolicy {
            max_attempts: 2,
            ..fast_policy()
        };
        let err = policy
            .translate(&StalledTranslator, "hello", "hi")
            .await
            .unwrap_err();

        match err {
            SummarizerError::Translation { attempts, message } => {
                assert_eq!(attempts, 2);
                assert!(message.contains("timed out"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let translator: Box<dyn Translate> = Box::new(FlakyTranslator::new(1));
        let result = fast_policy()
            .translate(translator.as_ref(), "hello", "hi")
            .await;
        assert_eq!(result.unwrap(), "hi:hello");
    }
}
