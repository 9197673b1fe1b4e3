// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Cetak assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Cetak configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CetakConfig {
    /// Assistant identity and conversation settings.
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Image upload limits.
    #[serde(default)]
    pub media: MediaConfig,

    /// Quote-request submission and notification settings.
    #[serde(default)]
    pub rfq: RfqConfig,

    /// Business hours for the welcome message.
    #[serde(default)]
    pub business_hours: BusinessHoursConfig,
}

/// Assistant identity and conversation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Display name of the assistant.
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// Default reply language code (en, id, ja, zh, ar).
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of user/bot exchange pairs retained as generation context.
    #[serde(default = "default_history_turns")]
    pub history_turns: usize,

    /// Maximum suggestion chips shown after a reply.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            default_language: default_language(),
            log_level: default_log_level(),
            history_turns: default_history_turns(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

fn default_assistant_name() -> String {
    "cetak".to_string()
}

fn default_language() -> String {
    "id".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_history_turns() -> usize {
    7
}

fn default_max_suggestions() -> usize {
    4
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` requires environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier for both text and vision requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation endpoint (overridable for testing).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timeout for text generation requests, in seconds.
    #[serde(default = "default_text_timeout_secs")]
    pub text_timeout_secs: u64,

    /// Timeout for image analysis requests, in seconds.
    #[serde(default = "default_vision_timeout_secs")]
    pub vision_timeout_secs: u64,

    /// Total attempts for rate-limited requests (1 initial + retries).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_url: default_api_url(),
            text_timeout_secs: default_text_timeout_secs(),
            vision_timeout_secs: default_vision_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_text_timeout_secs() -> u64 {
    10
}

fn default_vision_timeout_secs() -> u64 {
    15
}

fn default_max_retries() -> u32 {
    3
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("cetak").join("cetak.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("cetak.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Image upload limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MediaConfig {
    /// Maximum accepted image size in bytes.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Accepted image MIME types.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
            allowed_mime_types: default_allowed_mime_types(),
        }
    }
}

fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_allowed_mime_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/png".to_string(),
        "image/webp".to_string(),
    ]
}

/// Quote-request submission configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RfqConfig {
    /// Enable the email notification side-channel.
    #[serde(default)]
    pub notifications_enabled: bool,

    /// SMTP relay host. `None` disables notifications regardless of the flag.
    #[serde(default)]
    pub smtp_host: Option<String>,

    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username.
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password.
    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Sales team address that receives submission notifications.
    #[serde(default)]
    pub sales_email: Option<String>,

    /// Directory where uploaded design files are stored.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

impl Default for RfqConfig {
    fn default() -> Self {
        Self {
            notifications_enabled: false,
            smtp_host: None,
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            sales_email: None,
            upload_dir: default_upload_dir(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_upload_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("cetak").join("uploads"))
        .unwrap_or_else(|| std::path::PathBuf::from("uploads"))
        .to_string_lossy()
        .into_owned()
}

/// Business hours used by the welcome message.
///
/// Defaults match the Jakarta office: Monday to Friday 09:00-18:00,
/// Saturday 10:00-14:00, closed Sunday.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessHoursConfig {
    /// Office timezone as a fixed offset from UTC in hours.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Weekday opening hour (local, 24h).
    #[serde(default = "default_weekday_open")]
    pub weekday_open: u32,

    /// Weekday closing hour (local, 24h).
    #[serde(default = "default_weekday_close")]
    pub weekday_close: u32,

    /// Saturday opening hour (local, 24h).
    #[serde(default = "default_saturday_open")]
    pub saturday_open: u32,

    /// Saturday closing hour (local, 24h).
    #[serde(default = "default_saturday_close")]
    pub saturday_close: u32,
}

impl Default for BusinessHoursConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            weekday_open: default_weekday_open(),
            weekday_close: default_weekday_close(),
            saturday_open: default_saturday_open(),
            saturday_close: default_saturday_close(),
        }
    }
}

fn default_utc_offset_hours() -> i32 {
    7
}

fn default_weekday_open() -> u32 {
    9
}

fn default_weekday_close() -> u32 {
    18
}

fn default_saturday_open() -> u32 {
    10
}

fn default_saturday_close() -> u32 {
    14
}
