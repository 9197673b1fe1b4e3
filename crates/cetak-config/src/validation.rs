// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths, positive limits, and coherent
//! business-hour windows.

use crate::diagnostic::ConfigError;
use crate::model::CetakConfig;

const KNOWN_LANGUAGES: &[&str] = &["en", "id", "ja", "zh", "ar"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &CetakConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !KNOWN_LANGUAGES.contains(&config.assistant.default_language.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "assistant.default_language `{}` is not supported (expected one of: {})",
                config.assistant.default_language,
                KNOWN_LANGUAGES.join(", ")
            ),
        });
    }

    if config.assistant.history_turns == 0 {
        errors.push(ConfigError::Validation {
            message: "assistant.history_turns must be at least 1".to_string(),
        });
    }

    if config.assistant.max_suggestions == 0 {
        errors.push(ConfigError::Validation {
            message: "assistant.max_suggestions must be at least 1".to_string(),
        });
    }

    if config.gemini.api_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.api_url must not be empty".to_string(),
        });
    }

    if config.gemini.text_timeout_secs == 0 || config.gemini.vision_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini timeouts must be positive".to_string(),
        });
    }

    if config.gemini.max_retries == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.max_retries must be at least 1 (the initial attempt)".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.media.max_image_bytes == 0 {
        errors.push(ConfigError::Validation {
            message: "media.max_image_bytes must be positive".to_string(),
        });
    }

    if config.media.allowed_mime_types.is_empty() {
        errors.push(ConfigError::Validation {
            message: "media.allowed_mime_types must not be empty".to_string(),
        });
    }

    if config.rfq.notifications_enabled && config.rfq.smtp_host.is_none() {
        errors.push(ConfigError::Validation {
            message: "rfq.notifications_enabled requires rfq.smtp_host".to_string(),
        });
    }

    if config.rfq.notifications_enabled && config.rfq.sales_email.is_none() {
        errors.push(ConfigError::Validation {
            message: "rfq.notifications_enabled requires rfq.sales_email".to_string(),
        });
    }

    let hours = &config.business_hours;
    if !(-12..=14).contains(&hours.utc_offset_hours) {
        errors.push(ConfigError::Validation {
            message: format!(
                "business_hours.utc_offset_hours must be between -12 and 14, got {}",
                hours.utc_offset_hours
            ),
        });
    }

    for (label, open, close) in [
        ("weekday", hours.weekday_open, hours.weekday_close),
        ("saturday", hours.saturday_open, hours.saturday_close),
    ] {
        if open >= close || close > 24 {
            errors.push(ConfigError::Validation {
                message: format!(
                    "business_hours.{label}_open ({open}) must be before business_hours.{label}_close ({close}), with close at most 24"
                ),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
