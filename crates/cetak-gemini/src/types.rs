// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use cetak_core::types::GenerationParams;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn request carrying the given parts.
    pub fn single(parts: Vec<Part>, params: GenerationParams) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig::from(params),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One part of a request turn: either text or inline image data.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inline_data", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data_base64: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data_base64.into(),
            }),
        }
    }
}

/// Base64-encoded image bytes.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    #[serde(rename = "mime_type")]
    pub mime_type: String,
    pub data: String,
}

/// Sampling configuration, camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "topP")]
    pub top_p: f64,
    #[serde(rename = "topK")]
    pub top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

impl From<GenerationParams> for GenerationConfig {
    fn from(params: GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

/// Response body of `generateContent`. Only the first candidate's text is
/// consumed; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The trimmed text of the first candidate, if non-empty.
    pub fn first_text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .as_deref()?
            .trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_config() {
        let request = GenerateContentRequest::single(
            vec![Part::text("halo")],
            GenerationParams::default(),
        );
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "halo");
        let config = &json["generationConfig"];
        assert_eq!(config["temperature"], 0.4);
        assert_eq!(config["topP"], 0.8);
        assert_eq!(config["topK"], 40);
        assert_eq!(config["maxOutputTokens"], 200);
    }

    #[test]
    fn image_part_serializes_as_inline_data() {
        let part = Part::inline_data("image/png", "QUJD");
        let json = serde_json::to_value(&part).unwrap();
        assert!(json.get("text").is_none());
        assert_eq!(json["inline_data"]["mime_type"], "image/png");
        assert_eq!(json["inline_data"]["data"], "QUJD");
    }

    #[test]
    fn first_text_trims_and_rejects_empty() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "  hi  "}]}}]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("hi"));

        let empty = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "   "}]}}]
        });
        let response: GenerateContentResponse = serde_json::from_value(empty).unwrap();
        assert!(response.first_text().is_none());

        let none: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(none.first_text().is_none());
    }
}
