// file: src/nlp/patterns.rs
// description: compiled regex patterns for sentence and word segmentation
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // Terminal punctuation, optional closing quotes/brackets, then whitespace
    pub static ref SENTENCE_END: Regex = Regex::new(
        r#"[.!?]+["'’”)\]]*\s+"#
    ).expect("SENTENCE_END regex is valid");

    // Blank line between paragraphs
    pub static ref PARAGRAPH_BREAK: Regex = Regex::new(
        r"\n[ \t]*\n\s*"
    ).expect("PARAGRAPH_BREAK regex is valid");

    // Words with internal apostrophes or hyphens, or a single punctuation mark
    pub static ref WORD_TOKEN: Regex = Regex::new(
        r"\w+(?:['’\-]\w+)*|[^\w\s]"
    ).expect("WORD_TOKEN regex is valid");

    /// Lowercased forms without the final period.
    pub static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs",
        "e.g", "i.e", "cf", "al", "approx", "dept", "est", "fig", "inc", "ltd",
        "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
        "sept", "oct", "nov", "dec", "u.s", "u.k", "gen", "gov", "sen", "rep",
    ]
    .into_iter()
    .collect();
}

pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(word)
}

/// Forces compilation of every pattern so a bad pattern fails at startup.
pub fn warm_up() {
    lazy_static::initialize(&SENTENCE_END);
    lazy_static::initialize(&PARAGRAPH_BREAK);
    lazy_static::initialize(&WORD_TOKEN);
    lazy_static::initialize(&ABBREVIATIONS);
}
