// file: src/summarizer/scorer.rs
// description: sentence importance scoring from term weights, length and position
// reference: sqrt length normalization with u-shaped positional bias

use crate::nlp::TfidfMatrix;
use crate::nlp::tokenizer::tokenize_words;

/// U-shaped multiplier in `[1.0, 1.5]`: 1.5 for the first sentence, rising
/// towards 1.5 for the last, lowest around the middle.
pub fn positional_weight(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 1.0;
    }
    let pos = index as f64 / count as f64;
    0.5 + pos.max(1.0 - pos)
}

/// Scores every sentence as
///
/// ```text
/// score = (Σ W[word] / sqrt(word_count)) * positional_weight + cos(row, mean_row)
/// ```
///
/// where `W` is the document-wide term weight (column sum of the tf-idf
/// matrix) and words are the lowercased tokens of the sentence, stop words and
/// punctuation included (they weigh 0 but count towards the length).
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    use_similarity: bool,
}

impl SentenceScorer {
    pub fn new(use_similarity: bool) -> Self {
        Self { use_similarity }
    }

    pub fn score<S: AsRef<str>>(&self, sentences: &[S], matrix: &TfidfMatrix) -> Vec<f64> {
        let weights = matrix.term_weights();
        let mean_row = if self.use_similarity {
            Some(matrix.mean_row())
        } else {
            None
        };
        let count = sentences.len();

        sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let words = tokenize_words(&sentence.as_ref().to_lowercase());
                let content: f64 = words
                    .iter()
                    .map(|w| weights.get(w).copied().unwrap_or(0.0))
                    .sum();

                let normalized = if words.is_empty() {
                    0.0
                } else {
                    content / (words.len() as f64).sqrt()
                };

                let similarity = match (&mean_row, i < matrix.n_rows()) {
                    (Some(mean), true) => matrix.cosine_to(i, mean),
                    _ => 0.0,
                };

                let score = normalized * positional_weight(i, count) + similarity;
                if score.is_finite() { score } else { 0.0 }
            })
            .collect()
    }
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::new(true)
    }
}
