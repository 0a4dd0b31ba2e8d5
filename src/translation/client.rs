// file: src/translation/client.rs
// description: LibreTranslate compatible http translation client
// reference: https://libretranslate.com/docs

use crate::config::TranslationConfig;
use crate::error::{Result, SummarizerError};
use crate::translation::Translate;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct LibreTranslateClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &TranslationConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.attempt_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Translate for LibreTranslateClient {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let url = format!("{}/translate", self.endpoint);

        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!(
            "Requesting translation to '{}' for {} chars",
            target_language,
            text.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                SummarizerError::Provider(format!("Failed to send translation request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizerError::Provider(format!(
                "Translation request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: TranslateResponse = response.json().await.map_err(|e| {
            SummarizerError::Provider(format!("Failed to parse translation response: {}", e))
        })?;

        Ok(body.translated_text)
    }

    fn name(&self) -> &str {
        "libretranslate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    async fn spawn_provider(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn echo_translate(Json(body): Json<Value>) -> Json<Value> {
        let target = body["target"].as_str().unwrap_or_default();
        let source = body["source"].as_str().unwrap_or_default();
        let q = body["q"].as_str().unwrap_or_default();
        let keyed = body.get("api_key").is_some();
        Json(json!({
            "translatedText": format!("[{}|{}|{}] {}", target, source, keyed, q)
        }))
    }

    async fn failing_translate() -> (StatusCode, &'static str) {
        (StatusCode::SERVICE_UNAVAILABLE, "provider overloaded")
    }

    async fn malformed_translate() -> Json<Value> {
        Json(json!({ "unexpected": true }))
    }

    #[tokio::test]
    async fn test_translate_success() {
        let endpoint = spawn_provider(Router::new().route("/translate", post(echo_translate))).await;
        let client =
            LibreTranslateClient::new(format!("{}/", endpoint), None, Duration::from_secs(5))
                .unwrap();

        assert_eq!(client.endpoint(), endpoint);
        let translated = client.translate("Hello world.", "hi").await.unwrap();
        assert_eq!(translated, "[hi|auto|false] Hello world.");
    }

    #[tokio::test]
    async fn test_translate_sends_api_key() {
        let endpoint = spawn_provider(Router::new().route("/translate", post(echo_translate))).await;
        let client =
            LibreTranslateClient::new(endpoint, Some("secret".to_string()), Duration::from_secs(5))
                .unwrap();

        let translated = client.translate("Hi.", "mr").await.unwrap();
        assert_eq!(translated, "[mr|auto|true] Hi.");
    }

    #[tokio::test]
    async fn test_translate_error_status() {
        let endpoint =
            spawn_provider(Router::new().route("/translate", post(failing_translate))).await;
        let client = LibreTranslateClient::new(endpoint, None, Duration::from_secs(5)).unwrap();

        let err = client.translate("Hello.", "hi").await.unwrap_err();
        match err {
            SummarizerError::Provider(msg) => {
                assert!(msg.contains("503"));
                assert!(msg.contains("provider overloaded"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_malformed_body() {
        let endpoint =
            spawn_provider(Router::new().route("/translate", post(malformed_translate))).await;
        let client = LibreTranslateClient::new(endpoint, None, Duration::from_secs(5)).unwrap();

        let err = client.translate("Hello.", "hi").await.unwrap_err();
        assert!(matches!(err, SummarizerError::Provider(_)));
    }

    #[tokio::test]
    async fn test_translate_unreachable_provider() {
        let client = LibreTranslateClient::new(
            "http://127.0.0.1:9".to_string(),
            None,
            Duration::from_secs(2),
        )
        .unwrap();

        let err = client.translate("Hello.", "hi").await.unwrap_err();
        assert!(matches!(err, SummarizerError::Provider(_)));
    }
}
