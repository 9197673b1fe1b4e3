// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generative reply trait for hosted text/vision generation endpoints.

use async_trait::async_trait;

use crate::error::CetakError;
use crate::traits::adapter::ServiceAdapter;
use crate::types::{ConversationTurn, ImageAttachment, ImageReply, Language};

/// Client for a hosted generation endpoint.
///
/// Implementations own prompt construction, per-call timeouts, and bounded
/// retry on rate limiting; the orchestrator only sees final success or final
/// failure. No local state is mutated — the caller updates conversation
/// state from the return value.
#[async_trait]
pub trait ReplyGenerator: ServiceAdapter {
    /// Generates a reply for `input`, embedding up to the most recent history
    /// turns as inline context. `guidance` carries catalog text for
    /// dynamic-prompt records.
    async fn generate_text(
        &self,
        input: &str,
        language: Language,
        history: &[ConversationTurn],
        guidance: Option<&str>,
    ) -> Result<String, CetakError>;

    /// Analyzes an uploaded image and returns the reply plus a best-effort
    /// product-category guess derived from the reply text.
    async fn analyze_image(
        &self,
        image: &ImageAttachment,
        prompt_hint: &str,
        language: Language,
    ) -> Result<ImageReply, CetakError>;
}
