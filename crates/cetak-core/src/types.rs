// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across service traits and the Cetak assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Health status reported by service health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Service is fully operational.
    Healthy,
    /// Service is operational but experiencing issues.
    Degraded(String),
    /// Service is not operational.
    Unhealthy(String),
}

/// Identifies the kind of service behind a [`crate::ServiceAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum AdapterType {
    Generator,
    ContentStore,
    ObjectStore,
    Notifier,
}

/// Languages the assistant can reply in.
///
/// English and Indonesian have fully authored content; the remaining
/// languages fall back to English wherever a variant is missing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Id,
    Ja,
    Zh,
    Ar,
}

impl Language {
    /// English name of the language, as instructed to the generation endpoint.
    pub fn endpoint_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Id => "Indonesian",
            Language::Ja => "Japanese",
            Language::Zh => "Chinese",
            Language::Ar => "Arabic",
        }
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Delivery status of a user message.
///
/// `Sending` transitions to `Delivered` on success or to `Sent` on failure
/// ("shown but not confirmed delivered").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Sent,
    Delivered,
    Read,
}

/// One entry in the append-only conversation log.
///
/// Immutable once created except for `status`. Never deleted individually;
/// the whole log may be cleared on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub status: Option<MessageStatus>,
    #[serde(default)]
    pub has_image: bool,
    pub image_ref: Option<String>,
    pub image_name: Option<String>,
}

impl Message {
    /// A user message in `Sending` state.
    pub fn user(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::random(),
            sender: Sender::User,
            text: text.into(),
            timestamp,
            status: Some(MessageStatus::Sending),
            has_image: false,
            image_ref: None,
            image_name: None,
        }
    }

    /// A user message carrying an uploaded image.
    pub fn user_with_image(
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
        image_ref: impl Into<String>,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            id: MessageId::random(),
            sender: Sender::User,
            text: text.into(),
            timestamp,
            status: Some(MessageStatus::Sending),
            has_image: true,
            image_ref: Some(image_ref.into()),
            image_name: Some(image_name.into()),
        }
    }

    /// A bot reply. Bot messages carry no delivery status.
    pub fn bot(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::random(),
            sender: Sender::Bot,
            text: text.into(),
            timestamp,
            status: None,
            has_image: false,
            image_ref: None,
            image_name: None,
        }
    }
}

/// A paired (user message, bot reply) view used as model context.
///
/// Only constructed when a bot message is appended and a prior user message
/// exists. The turn list is FIFO-truncated to the most recent entries to
/// bound prompt size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub has_image: bool,
}

/// How a catalog record answers a matching input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Canned text returned verbatim.
    Static,
    /// Canned text used as extra guidance for the generation endpoint.
    DynamicPrompt,
    /// Canned text returned verbatim, then the RFQ form opens.
    RfqTrigger,
}

/// An externally authored canned-response rule keyed by trigger keywords.
///
/// Owned by the content store; the assistant only reads these through a
/// short-lived cache. Matching is case-insensitive substring containment of
/// any trigger in the user's input, first hit by descending priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub id: String,
    pub keyword_triggers: Vec<String>,
    pub text_en: String,
    pub text_id: String,
    pub text_ja: Option<String>,
    pub text_zh: Option<String>,
    pub text_ar: Option<String>,
    pub response_type: ResponseType,
    pub priority: i64,
    pub is_active: bool,
    pub category: Option<String>,
}

impl CatalogResponse {
    /// Response text for `language`, falling back to English when the
    /// requested variant is absent.
    pub fn text_for(&self, language: Language) -> &str {
        match language {
            Language::En => &self.text_en,
            Language::Id => &self.text_id,
            Language::Ja => self.text_ja.as_deref().unwrap_or(&self.text_en),
            Language::Zh => self.text_zh.as_deref().unwrap_or(&self.text_en),
            Language::Ar => self.text_ar.as_deref().unwrap_or(&self.text_en),
        }
    }
}

/// Category tag carried by a suggestion chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Printing,
    Services,
    Pricing,
    Contact,
    General,
    Image,
    Rfq,
}

/// A clickable follow-up phrase offered after a bot reply.
///
/// Ephemeral: regenerated after every exchange, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionChip {
    pub id: String,
    pub text: String,
    pub category: SuggestionCategory,
}

impl SuggestionChip {
    pub fn new(text: impl Into<String>, category: SuggestionCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            category,
        }
    }
}

/// Sampling parameters passed to the generation endpoint.
///
/// Sourced from the content store's key/value config table with these
/// hardcoded fallbacks when the store is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 200,
        }
    }
}

/// One row of the AI runtime configuration table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiParameter {
    pub name: String,
    pub value: f64,
    pub is_active: bool,
}

/// Image bytes handed to the vision path, already validated for type/size.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

/// Product category guessed from the model's reply text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    BusinessCards,
    Brochures,
    Banners,
    Stickers,
    #[default]
    General,
}

/// Printing process recommended for a product category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PrintingType {
    #[default]
    Digital,
    Offset,
    LargeFormat,
}

/// A material suggestion attached to an image analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecommendation {
    pub material: String,
    pub description: String,
    /// 0.0..=1.0, derived from the material's durability rating.
    pub suitability: f64,
    pub finishing_options: Vec<String>,
}

/// Rough price range in the given currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub min_price: i64,
    pub max_price: i64,
    pub currency: String,
    pub factors: Vec<String>,
}

/// Heuristic post-processing of a vision reply.
///
/// This is a keyword scan over the model's own words, not independent
/// analysis; treat it as best-effort metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub product_category: ProductCategory,
    pub printing_type: PrintingType,
    pub materials: Vec<MaterialRecommendation>,
    pub cost_estimate: Option<CostEstimate>,
    pub confidence: f64,
}

impl Default for ImageAnalysis {
    fn default() -> Self {
        Self {
            product_category: ProductCategory::General,
            printing_type: PrintingType::Digital,
            materials: Vec::new(),
            cost_estimate: None,
            confidence: 0.7,
        }
    }
}

/// Reply plus heuristic analysis returned by the vision path.
#[derive(Debug, Clone)]
pub struct ImageReply {
    pub reply: String,
    pub analysis: ImageAnalysis,
}

/// Lifecycle of a persisted quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RfqStatus {
    Pending,
    Reviewed,
    Quoted,
    Completed,
    Cancelled,
}

/// One immutable quote-request record as persisted by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfqSubmission {
    pub id: String,
    pub user_name: String,
    pub user_email: String,
    pub project_name: String,
    pub product_category: Option<String>,
    pub size_specifications: String,
    pub quantity: i64,
    pub deadline: Option<String>,
    pub design_file_refs: Vec<String>,
    pub additional_notes: Option<String>,
    pub estimated_cost_min: Option<i64>,
    pub estimated_cost_max: Option<i64>,
    pub currency: String,
    pub language: Language,
    pub status: RfqStatus,
    pub created_at: DateTime<Utc>,
}
