// file: src/translation/mod.rs
// description: translation provider abstraction, http client, retry and trigger policy
// reference: internal module structure

pub mod client;
pub mod policy;
pub mod retry;

pub use client::LibreTranslateClient;
pub use policy::{LanguageScope, TranslationDecision, TranslationPolicy};
pub use retry::RetryPolicy;

use crate::error::Result;
use async_trait::async_trait;

/// A translation provider. One call is one attempt; retries are layered on
/// top by [`RetryPolicy`].
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;

    fn name(&self) -> &str;
}
