// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock reply generator for deterministic testing.
//!
//! `MockGenerator` implements `ReplyGenerator` with pre-configured outcomes,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cetak_core::error::{CetakError, GenerativeError};
use cetak_core::traits::adapter::ServiceAdapter;
use cetak_core::traits::generator::ReplyGenerator;
use cetak_core::types::{
    AdapterType, ConversationTurn, HealthStatus, ImageAnalysis, ImageAttachment, ImageReply,
    Language,
};

/// One recorded generation call, for asserting on prompts and context.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub input: String,
    pub language: Language,
    pub history_len: usize,
    pub guidance: Option<String>,
}

/// A mock generator that returns pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty, a default
/// "mock reply" text is returned. Every call is recorded for inspection.
pub struct MockGenerator {
    outcomes: Arc<Mutex<VecDeque<Result<String, GenerativeError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGenerator {
    /// Create a new mock generator with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock generator pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<String>) -> Self {
        let generator = Self::new();
        {
            let outcomes = Arc::clone(&generator.outcomes);
            let mut queue = outcomes.try_lock().expect("fresh mock is uncontended");
            queue.extend(replies.into_iter().map(Ok));
        }
        generator
    }

    /// Queue a successful reply.
    pub async fn push_reply(&self, text: impl Into<String>) {
        self.outcomes.lock().await.push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub async fn push_error(&self, error: GenerativeError) {
        self.outcomes.lock().await.push_back(Err(error));
    }

    /// All calls made so far, in order.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn next_outcome(&self) -> Result<String, CetakError> {
        match self.outcomes.lock().await.pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(err)) => Err(CetakError::Generative(err)),
            None => Ok("mock reply".to_string()),
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceAdapter for MockGenerator {
    fn name(&self) -> &str {
        "mock-generator"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Generator
    }

    async fn health_check(&self) -> Result<HealthStatus, CetakError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CetakError> {
        Ok(())
    }
}

#[async_trait]
impl ReplyGenerator for MockGenerator {
    async fn generate_text(
        &self,
        input: &str,
        language: Language,
        history: &[ConversationTurn],
        guidance: Option<&str>,
    ) -> Result<String, CetakError> {
        self.calls.lock().await.push(RecordedCall {
            input: input.to_string(),
            language,
            history_len: history.len(),
            guidance: guidance.map(str::to_string),
        });
        self.next_outcome().await
    }

    async fn analyze_image(
        &self,
        image: &ImageAttachment,
        prompt_hint: &str,
        language: Language,
    ) -> Result<ImageReply, CetakError> {
        self.calls.lock().await.push(RecordedCall {
            input: format!("[image:{}] {prompt_hint}", image.file_name),
            language,
            history_len: 0,
            guidance: None,
        });
        let reply = self.next_outcome().await?;
        Ok(ImageReply {
            reply,
            analysis: ImageAnalysis::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_reply_when_queue_empty() {
        let generator = MockGenerator::new();
        let reply = generator
            .generate_text("halo", Language::Id, &[], None)
            .await
            .unwrap();
        assert_eq!(reply, "mock reply");
    }

    #[tokio::test]
    async fn queued_outcomes_returned_in_order() {
        let generator = MockGenerator::with_replies(vec!["first".into(), "second".into()]);
        generator.push_error(GenerativeError::EmptyResponse).await;

        assert_eq!(
            generator
                .generate_text("a", Language::Id, &[], None)
                .await
                .unwrap(),
            "first"
        );
        assert_eq!(
            generator
                .generate_text("b", Language::Id, &[], None)
                .await
                .unwrap(),
            "second"
        );
        let err = generator
            .generate_text("c", Language::Id, &[], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CetakError::Generative(GenerativeError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn calls_are_recorded() {
        let generator = MockGenerator::new();
        generator
            .generate_text("berapa harga?", Language::Id, &[], Some("price table"))
            .await
            .unwrap();

        let calls = generator.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].input, "berapa harga?");
        assert_eq!(calls[0].guidance.as_deref(), Some("price table"));
    }
}
