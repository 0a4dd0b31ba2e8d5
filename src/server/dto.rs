// file: src/server/dto.rs
// description: json request and response bodies of the http api
// reference: serde derived transfer objects

use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Body of `POST /summarize`. Every field is optional at the JSON level so
/// a missing `text` can be reported as a validation error.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Negative counts are treated as zero.
    #[serde(default)]
    pub sentences: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SummarizeResponse {
    pub summary: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: STATUS_ERROR.to_string(),
        }
    }
}
