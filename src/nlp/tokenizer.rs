// file: src/nlp/tokenizer.rs
// description: sentence segmentation and word tokenization
// reference: punctuation and abbreviation aware splitting over compiled patterns

use crate::nlp::patterns::{PARAGRAPH_BREAK, SENTENCE_END, WORD_TOKEN, is_abbreviation};

/// Splits text into trimmed sentences, preserving their original order and
/// wording. Blank lines always end a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();

    for paragraph in PARAGRAPH_BREAK.split(text) {
        let mut start = 0;

        for terminator in SENTENCE_END.find_iter(paragraph) {
            if !is_boundary(paragraph, start, terminator.start(), terminator.end()) {
                continue;
            }

            let end = terminator.start() + terminator.as_str().trim_end().len();
            push_sentence(&mut sentences, &paragraph[start..end]);
            start = terminator.end();
        }

        push_sentence(&mut sentences, &paragraph[start..]);
    }

    sentences
}

/// Word and punctuation tokens in order of appearance. Punctuation marks are
/// returned as separate tokens.
pub fn tokenize_words(text: &str) -> Vec<String> {
    WORD_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

fn is_boundary(paragraph: &str, start: usize, terminator_start: usize, next: usize) -> bool {
    // A lowercase continuation means the period was not terminal
    if let Some(c) = paragraph[next..].chars().next() {
        if c.is_lowercase() {
            return false;
        }
    }

    let punctuation: String = paragraph[terminator_start..]
        .chars()
        .take_while(|c| matches!(c, '.' | '!' | '?'))
        .collect();
    if punctuation != "." {
        return true;
    }

    let preceding = paragraph[start..terminator_start]
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    !is_abbreviation(&preceding)
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
