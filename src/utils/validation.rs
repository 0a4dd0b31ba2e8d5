// file: src/utils/validation.rs
// description: request and configuration validation helpers
// reference: input validation patterns

use crate::error::{Result, SummarizerError};

pub struct Validator;

impl Validator {
    pub fn validate_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(SummarizerError::Validation("No text provided".to_string()));
        }
        Ok(())
    }

    pub fn validate_sentence_count(count: usize, max: usize) -> Result<()> {
        if count > max {
            return Err(SummarizerError::Validation(format!(
                "Requested {} sentences, maximum is {}",
                count, max
            )));
        }
        Ok(())
    }

    /// Accepts ISO 639 style codes with an optional region, e.g. `hi`, `pt-BR`.
    pub fn validate_language_code(code: &str) -> Result<()> {
        let mut parts = code.split('-');
        let primary = parts.next().unwrap_or_default();

        let primary_ok = (2..=3).contains(&primary.len())
            && primary.chars().all(|c| c.is_ascii_alphabetic());
        let rest_ok = parts.all(|p| {
            (2..=4).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric())
        });

        if !primary_ok || !rest_ok {
            return Err(SummarizerError::Validation(format!(
                "Invalid language code: {}",
                code
            )));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SummarizerError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(SummarizerError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}
