// file: src/summarizer/mod.rs
// description: extractive summarizer wiring tokenizer, tf-idf, scorer and selector
// reference: sentences in, top ranked sentences out in document order

pub mod scorer;
pub mod selector;

pub use scorer::{SentenceScorer, positional_weight};
pub use selector::{join_selected, select_top};

use crate::config::SummarizerConfig;
use crate::error::Result;
use crate::nlp::{NgramRange, StopWords, TfidfVectorizer, patterns, split_sentences};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SummarizerOptions {
    pub ngram_range: NgramRange,
    pub use_similarity: bool,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            ngram_range: NgramRange::default(),
            use_similarity: true,
        }
    }
}

/// Everything computed for one document; `scores` is empty when scoring was
/// skipped.
#[derive(Debug, Clone)]
pub struct SummaryDetail {
    pub summary: String,
    pub sentences: Vec<String>,
    pub scores: Vec<f64>,
    pub selected: Vec<usize>,
    pub short_circuit: bool,
}

/// Holds only read-only resources; every call builds its own vocabulary and
/// scores, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Summarizer {
    stop_words: StopWords,
    options: SummarizerOptions,
}

impl Summarizer {
    pub fn new(stop_words: StopWords, options: SummarizerOptions) -> Self {
        Self {
            stop_words,
            options,
        }
    }

    /// Startup provisioning: compiles patterns and loads stop words once.
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        patterns::warm_up();
        let stop_words = StopWords::load(config.extra_stopwords_path.as_deref())?;
        let options = SummarizerOptions {
            ngram_range: NgramRange::new(config.ngram_min, config.ngram_max)?,
            use_similarity: config.use_similarity,
        };
        Ok(Self::new(stop_words, options))
    }

    pub fn summarize(&self, text: &str, count: usize) -> Result<String> {
        self.summarize_detailed(text, count).map(|detail| detail.summary)
    }

    pub fn summarize_detailed(&self, text: &str, count: usize) -> Result<SummaryDetail> {
        let sentences = split_sentences(text);

        if count == 0 {
            return Ok(SummaryDetail {
                summary: String::new(),
                sentences,
                scores: Vec::new(),
                selected: Vec::new(),
                short_circuit: false,
            });
        }

        if sentences.len() <= count {
            debug!(
                "Document has {} sentences, {} requested; returning it unchanged",
                sentences.len(),
                count
            );
            let selected = (0..sentences.len()).collect();
            return Ok(SummaryDetail {
                summary: text.to_string(),
                sentences,
                scores: Vec::new(),
                selected,
                short_circuit: true,
            });
        }

        let matrix = TfidfVectorizer::new(&self.stop_words, self.options.ngram_range)
            .fit_transform(&sentences)?;
        debug!(
            "Weighted {} sentences over {} terms",
            matrix.n_rows(),
            matrix.n_terms()
        );

        let scores = SentenceScorer::new(self.options.use_similarity).score(&sentences, &matrix);
        let selected = select_top(&scores, count);
        let summary = join_selected(&sentences, &selected);

        Ok(SummaryDetail {
            summary,
            sentences,
            scores,
            selected,
            short_circuit: false,
        })
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(StopWords::english(), SummarizerOptions::default())
    }
}
