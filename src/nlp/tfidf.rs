// file: src/nlp/tfidf.rs
// description: tf-idf term weighting over the sentences of a single document
// reference: smoothed idf, raw term counts, l2 normalized rows

use crate::error::{Result, SummarizerError};
use crate::nlp::stopwords::StopWords;
use crate::nlp::tokenizer::{is_word, tokenize_words};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Sparse row: `(term index, weight)` sorted by term index.
pub type SparseRow = Vec<(usize, f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramRange {
    pub min: usize,
    pub max: usize,
}

impl NgramRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min > max {
            return Err(SummarizerError::Config(format!(
                "invalid ngram range ({}, {})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn unigrams() -> Self {
        Self { min: 1, max: 1 }
    }
}

impl Default for NgramRange {
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

pub struct TfidfVectorizer<'a> {
    stop_words: &'a StopWords,
    ngram_range: NgramRange,
}

impl<'a> TfidfVectorizer<'a> {
    pub fn new(stop_words: &'a StopWords, ngram_range: NgramRange) -> Self {
        Self {
            stop_words,
            ngram_range,
        }
    }

    /// Lowercased, stop-word free terms of one document, n-grams included.
    pub fn analyze(&self, document: &str) -> Vec<String> {
        let words: Vec<String> = tokenize_words(&document.to_lowercase())
            .into_iter()
            .filter(|token| is_word(token) && !self.stop_words.contains(token))
            .collect();

        let mut terms = Vec::new();
        for n in self.ngram_range.min..=self.ngram_range.max {
            if n > words.len() {
                break;
            }
            terms.extend(words.windows(n).map(|gram| gram.join(" ")));
        }
        terms
    }

    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfidfMatrix> {
        let analyzed: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.analyze(doc.as_ref()))
            .collect();

        let vocabulary: Vec<String> = analyzed
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if vocabulary.is_empty() {
            return Err(SummarizerError::Summarization(
                "empty vocabulary; perhaps the documents only contain stop words".to_string(),
            ));
        }

        let index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for terms in &analyzed {
            let unique: HashSet<usize> = terms.iter().map(|t| index[t]).collect();
            for idx in unique {
                doc_freq[idx] += 1;
            }
        }

        let doc_count = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + doc_count) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = analyzed
            .iter()
            .map(|terms| {
                let mut counts: HashMap<usize, usize> = HashMap::new();
                for term in terms {
                    *counts.entry(index[term]).or_insert(0) += 1;
                }

                let mut row: SparseRow = counts
                    .into_iter()
                    .map(|(idx, count)| (idx, count as f64 * idf[idx]))
                    .collect();
                row.sort_by_key(|&(idx, _)| idx);

                let row_norm = norm(row.iter().map(|&(_, w)| w));
                if row_norm > 0.0 {
                    for (_, w) in row.iter_mut() {
                        *w /= row_norm;
                    }
                }
                row
            })
            .collect();

        Ok(TfidfMatrix {
            vocabulary,
            index,
            rows,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<SparseRow>,
}

impl TfidfMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn row(&self, i: usize) -> &[(usize, f64)] {
        &self.rows[i]
    }

    pub fn weight(&self, row: usize, term: &str) -> f64 {
        self.index
            .get(term)
            .and_then(|&idx| {
                self.rows[row]
                    .binary_search_by_key(&idx, |&(i, _)| i)
                    .ok()
                    .map(|pos| self.rows[row][pos].1)
            })
            .unwrap_or(0.0)
    }

    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.vocabulary.len()];
        for row in &self.rows {
            for &(idx, w) in row {
                sums[idx] += w;
            }
        }
        sums
    }

    pub fn mean_row(&self) -> Vec<f64> {
        let n = self.rows.len().max(1) as f64;
        self.column_sums().into_iter().map(|s| s / n).collect()
    }

    /// Document-wide importance of every term: the sum of its weight across rows.
    pub fn term_weights(&self) -> HashMap<String, f64> {
        self.vocabulary
            .iter()
            .cloned()
            .zip(self.column_sums())
            .collect()
    }

    /// Cosine similarity between row `i` and a dense vector over the vocabulary.
    pub fn cosine_to(&self, i: usize, dense: &[f64]) -> f64 {
        let row = &self.rows[i];
        let row_norm = norm(row.iter().map(|&(_, w)| w));
        let dense_norm = norm(dense.iter().copied());
        if row_norm == 0.0 || dense_norm == 0.0 {
            return 0.0;
        }

        let dot: f64 = row.iter().map(|&(idx, w)| w * dense[idx]).sum();
        dot / (row_norm * dense_norm)
    }
}

fn norm(values: impl Iterator<Item = f64>) -> f64 {
    values.map(|x| x * x).sum::<f64>().sqrt()
}
