// file: src/nlp/mod.rs
// description: tokenization and term weighting module exports
// reference: internal module structure

pub mod patterns;
pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;

pub use stopwords::StopWords;
pub use tfidf::{NgramRange, TfidfMatrix, TfidfVectorizer};
pub use tokenizer::{split_sentences, tokenize_words};
