// file: src/server/handlers.rs
// description: http handlers for liveness and summarization
// reference: https://docs.rs/axum

use crate::error::SummarizerError;
use crate::pipeline::{SummaryRequest, SummaryService};
use crate::server::dto::{
    ErrorResponse, STATUS_SUCCESS, StatusResponse, SummarizeRequest, SummarizeResponse,
};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

pub type AppState = Arc<SummaryService>;

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        message: "Multilingual Summarizer Backend is running".to_string(),
    })
}

pub async fn summarize(
    State(service): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("summarize", %request_id);

    async move {
        let Json(body) = match payload {
            Ok(body) => body,
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(rejection.body_text())),
                )
                    .into_response();
            }
        };

        let request = SummaryRequest {
            text: body.text.unwrap_or_default(),
            language: body.language,
            sentences: body.sentences.map(|n| n.max(0) as usize),
        };

        info!(
            "Summarize request: {} chars, language {:?}, sentences {:?}",
            request.text.len(),
            request.language,
            request.sentences
        );

        match service.summarize(request).await {
            Ok(outcome) => Json(SummarizeResponse {
                summary: outcome.summary,
                status: STATUS_SUCCESS.to_string(),
                warning: outcome.warning,
            })
            .into_response(),
            Err(err) => error_response(err).into_response(),
        }
    }
    .instrument(span)
    .await
}

pub fn error_response(err: SummarizerError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        SummarizerError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Invalid request: {}", err);
    }

    (status, Json(ErrorResponse::new(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::Result;
    use crate::summarizer::Summarizer;
    use crate::translation::Translate;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde::de::DeserializeOwned;

    const TEXT: &str = "Solar panels convert sunlight into electricity. Wind turbines harvest kinetic energy. Batteries store surplus power for the night. Grid operators balance supply and demand. Renewable energy keeps getting cheaper every year.";

    struct UpperTranslator;

    #[async_trait]
    impl Translate for UpperTranslator {
        async fn translate(&self, text: &str, _target_language: &str) -> Result<String> {
            Ok(text.to_uppercase())
        }

        fn name(&self) -> &str {
            "upper"
        }
    }

    struct DownTranslator;

    #[async_trait]
    impl Translate for DownTranslator {
        async fn translate(&self, _text: &str, _target_language: &str) -> Result<String> {
            Err(SummarizerError::Provider("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    fn state_with(translator: Arc<dyn Translate>) -> AppState {
        let mut config = Config::default_config();
        config.translation.initial_backoff_ms = 1;
        config.translation.max_backoff_ms = 1;
        Arc::new(SummaryService::new(
            Summarizer::default(),
            translator,
            &config,
        ))
    }

    fn body(text: Option<&str>, language: Option<&str>, sentences: Option<i64>) -> SummarizeRequest {
        SummarizeRequest {
            text: text.map(str::to_string),
            language: language.map(str::to_string),
            sentences,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> (StatusCode, T) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status() {
        let Json(response) = status().await;
        assert_eq!(response.status, "online");
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let state = state_with(Arc::new(UpperTranslator));
        let response = summarize(State(state), Ok(Json(body(Some(TEXT), None, Some(2))))).await;

        let (status, payload): (_, SummarizeResponse) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "success");
        assert_eq!(crate::nlp::split_sentences(&payload.summary).len(), 2);
        assert_eq!(payload.warning, None);
    }

    #[tokio::test]
    async fn test_summarize_translates() {
        let state = state_with(Arc::new(UpperTranslator));
        let response =
            summarize(State(state), Ok(Json(body(Some(TEXT), Some("hi"), Some(1))))).await;

        let (status, payload): (_, SummarizeResponse) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.summary, payload.summary.to_uppercase());
    }

    #[tokio::test]
    async fn test_missing_text_is_bad_request() {
        let state = state_with(Arc::new(UpperTranslator));
        let response = summarize(State(state), Ok(Json(body(None, None, None)))).await;

        let (status, payload): (_, ErrorResponse) = read_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload, ErrorResponse::new("No text provided"));
    }

    #[tokio::test]
    async fn test_negative_sentences_yield_empty_summary() {
        let state = state_with(Arc::new(UpperTranslator));
        let response = summarize(State(state), Ok(Json(body(Some(TEXT), None, Some(-4))))).await;

        let (status, payload): (_, SummarizeResponse) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.summary, "");
    }

    #[tokio::test]
    async fn test_translation_failure_is_server_error() {
        let state = state_with(Arc::new(DownTranslator));
        let response =
            summarize(State(state), Ok(Json(body(Some(TEXT), Some("mr"), Some(2))))).await;

        let (status, payload): (_, ErrorResponse) = read_json(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(payload.status, "error");
        assert!(payload.error.starts_with("Translation error"));
    }

    #[tokio::test]
    async fn test_summarization_failure_is_server_error() {
        let state = state_with(Arc::new(UpperTranslator));
        let text = "It is. It was. It will be. It is not.";
        let response = summarize(State(state), Ok(Json(body(Some(text), None, Some(1))))).await;

        let (status, payload): (_, ErrorResponse) = read_json(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(payload.error.starts_with("Summarization error"));
    }
}
