// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod server;
pub mod summarizer;
pub mod translation;
pub mod utils;

pub use config::{Config, ServerConfig, SummarizerConfig, TranslationConfig};
pub use error::{Result, SummarizerError};
pub use nlp::{NgramRange, StopWords, TfidfMatrix, TfidfVectorizer};
pub use pipeline::{SummaryOutcome, SummaryRequest, SummaryService};
pub use summarizer::{SentenceScorer, Summarizer, SummarizerOptions, SummaryDetail};
pub use translation::{
    LanguageScope, LibreTranslateClient, RetryPolicy, Translate, TranslationDecision,
    TranslationPolicy,
};
pub use utils::{OperationTimer, Validator};
