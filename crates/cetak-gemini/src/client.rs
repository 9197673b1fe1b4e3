// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! Provides [`GeminiClient`], which handles request construction, per-call
//! timeouts, bounded retry on rate limiting, and error classification at the
//! HTTP boundary. Callers only ever see a final reply string or a
//! [`GenerativeError`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, warn};

use cetak_catalog::AiConfigLoader;
use cetak_config::model::GeminiConfig;
use cetak_core::error::{CetakError, GenerativeError};
use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::generator::ReplyGenerator;
use cetak_core::types::{
    AdapterType, ConversationTurn, HealthStatus, ImageAttachment, ImageReply, Language,
};

use crate::types::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::{prompt, vision};

/// Delay unit for linear backoff between rate-limited attempts.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// HTTP client for Gemini API communication.
///
/// Sampling parameters are read through the [`AiConfigLoader`] on every call,
/// so operator tuning takes effect without a restart.
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
    api_key: String,
    text_timeout: Duration,
    vision_timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
    ai_config: Arc<AiConfigLoader>,
}

impl GeminiClient {
    /// Creates a new Gemini API client from configuration.
    ///
    /// Fails if no API key is configured.
    pub fn new(config: &GeminiConfig, ai_config: Arc<AiConfigLoader>) -> Result<Self, CetakError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| CetakError::Config("gemini.api_key is not set".to_string()))?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CetakError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            text_timeout: Duration::from_secs(config.text_timeout_secs),
            vision_timeout: Duration::from_secs(config.vision_timeout_secs),
            max_retries: config.max_retries,
            retry_delay: RETRY_DELAY,
            ai_config,
        })
    }

    /// Overrides the retry backoff unit (for testing).
    #[cfg(test)]
    fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Sends the parts to the endpoint and returns the first candidate text.
    ///
    /// Only HTTP 429 is retried, with linear backoff, up to the configured
    /// attempt budget. Every other failure is classified and returned
    /// immediately.
    async fn call(&self, parts: Vec<Part>, timeout: Duration) -> Result<String, CetakError> {
        let params = self.ai_config.generation_params(false).await;
        let request = GenerateContentRequest::single(parts, params);
        let url = self.endpoint_url();

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay * attempt).await;
            }

            let response = self
                .client
                .post(&url)
                .json(&request)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| GenerativeError::Network {
                    source: Box::new(e),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "generation response received");

            if status.is_success() {
                let body: GenerateContentResponse =
                    response.json().await.map_err(|e| GenerativeError::Network {
                        source: Box::new(e),
                    })?;
                return body
                    .first_text()
                    .ok_or_else(|| GenerativeError::EmptyResponse.into());
            }

            if status.as_u16() == 429 && attempt + 1 < self.max_retries {
                warn!(attempt, "rate limited, will retry");
                continue;
            }

            return Err(GenerativeError::from_status(status.as_u16(), attempt + 1).into());
        }

        Err(GenerativeError::RateLimited {
            attempts: self.max_retries,
        }
        .into())
    }
}

#[async_trait]
impl ServiceAdapter for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Generator
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        // No side-effect-free ping exists for this endpoint; report healthy
        // as long as the client is constructed.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        Ok(())
    }
}

#[async_trait]
impl ReplyGenerator for GeminiClient {
    async fn generate_text(
        &self,
        input: &str,
        language: Language,
        history: &[ConversationTurn],
        guidance: Option<&str>,
    ) -> Result<String, CetakError> {
        let text = prompt::build_text_prompt(input, language, history, guidance);
        self.call(vec![Part::text(text)], self.text_timeout).await
    }

    async fn analyze_image(
        &self,
        image: &ImageAttachment,
        prompt_hint: &str,
        language: Language,
    ) -> Result<ImageReply, CetakError> {
        let text = prompt::build_image_prompt(prompt_hint, language);
        let encoded = BASE64.encode(&image.bytes);
        let parts = vec![
            Part::inline_data(image.mime_type.clone(), encoded),
            Part::text(text),
        ];

        let reply = self.call(parts, self.vision_timeout).await?;
        let analysis = vision::analyze_reply(&reply);
        Ok(ImageReply { reply, analysis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cetak_test_utils::MemoryContentStore;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        let config = GeminiConfig {
            api_key: Some("test-api-key".into()),
            api_url: base_url.to_string(),
            ..GeminiConfig::default()
        };
        let loader = Arc::new(AiConfigLoader::new(Arc::new(MemoryContentStore::new())));
        GeminiClient::new(&config, loader)
            .unwrap()
            .with_retry_delay(Duration::from_millis(10))
    }

    fn reply_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })
    }

    #[tokio::test]
    async fn generate_text_returns_first_candidate() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("  Halo!  ")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap();
        assert_eq!(reply, "Halo!");
    }

    #[tokio::test]
    async fn request_carries_generation_config() {
        let server = MockServer::start().await;

        let expected = serde_json::json!({
            "generationConfig": {
                "temperature": 0.4,
                "topP": 0.8,
                "topK": 40,
                "maxOutputTokens": 200
            }
        });
        Mock::given(method("POST"))
            .and(body_partial_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn retries_on_429_then_succeeds() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("after retry")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap();
        assert_eq!(reply, "after retry");
    }

    #[tokio::test]
    async fn exhausted_rate_limit_reports_attempts() {
        let server = MockServer::start().await;

        // Default budget is 3 attempts, all rate limited.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CetakError::Generative(GenerativeError::RateLimited { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn client_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CetakError::Generative(GenerativeError::BadRequest)
        ));
    }

    #[tokio::test]
    async fn auth_failure_maps_to_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, CetakError::Generative(GenerativeError::Auth)));
    }

    #[tokio::test]
    async fn server_error_maps_to_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CetakError::Generative(GenerativeError::ServerUnavailable)
        ));
    }

    #[tokio::test]
    async fn empty_candidates_map_to_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CetakError::Generative(GenerativeError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn analyze_image_sends_inline_data_and_classifies_reply() {
        let server = MockServer::start().await;

        let expected = serde_json::json!({
            "contents": [{
                "parts": [
                    {"inline_data": {"mime_type": "image/png", "data": BASE64.encode(b"fake-png")}},
                ]
            }]
        });
        Mock::given(method("POST"))
            .and(body_partial_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body(
                "Ini desain kartu nama yang bagus. Hubungi kami untuk penawaran.",
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let image = ImageAttachment {
            bytes: b"fake-png".to_vec(),
            mime_type: "image/png".to_string(),
            file_name: "design.png".to_string(),
        };
        let result = client
            .analyze_image(&image, "cek desain ini", Language::Id)
            .await
            .unwrap();
        assert!(result.reply.contains("kartu nama"));
        assert_eq!(
            result.analysis.product_category,
            cetak_core::types::ProductCategory::BusinessCards
        );
    }

    #[test]
    fn missing_api_key_fails_construction() {
        let config = GeminiConfig::default();
        let loader = Arc::new(AiConfigLoader::new(Arc::new(MemoryContentStore::new())));
        let err = GeminiClient::new(&config, loader).err().unwrap();
        assert!(matches!(err, CetakError::Config(_)));
    }
}
