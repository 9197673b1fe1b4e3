// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Cetak configuration system.

use cetak_config::diagnostic::{ConfigError, suggest_key};
use cetak_config::model::CetakConfig;
use cetak_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_cetak_config() {
    let toml = r#"
[assistant]
name = "test-assistant"
default_language = "en"
log_level = "debug"
history_turns = 5
max_suggestions = 3

[gemini]
api_key = "gm-123"
model = "gemini-2.0-flash"
text_timeout_secs = 8
max_retries = 2

[storage]
database_path = "/tmp/test.db"
wal_mode = false

[media]
max_image_bytes = 1048576
allowed_mime_types = ["image/png"]

[rfq]
notifications_enabled = true
smtp_host = "smtp.example.com"
smtp_port = 2525
sales_email = "sales@example.com"
upload_dir = "/tmp/uploads"

[business_hours]
utc_offset_hours = 7
weekday_open = 8
weekday_close = 17
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.assistant.name, "test-assistant");
    assert_eq!(config.assistant.default_language, "en");
    assert_eq!(config.assistant.log_level, "debug");
    assert_eq!(config.assistant.history_turns, 5);
    assert_eq!(config.assistant.max_suggestions, 3);
    assert_eq!(config.gemini.api_key.as_deref(), Some("gm-123"));
    assert_eq!(config.gemini.text_timeout_secs, 8);
    assert_eq!(config.gemini.max_retries, 2);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.media.max_image_bytes, 1048576);
    assert_eq!(config.media.allowed_mime_types, vec!["image/png"]);
    assert!(config.rfq.notifications_enabled);
    assert_eq!(config.rfq.smtp_host.as_deref(), Some("smtp.example.com"));
    assert_eq!(config.rfq.smtp_port, 2525);
    assert_eq!(config.rfq.upload_dir, "/tmp/uploads");
    assert_eq!(config.business_hours.weekday_open, 8);
    assert_eq!(config.business_hours.weekday_close, 17);
}

/// Unknown field in [assistant] section is rejected.
#[test]
fn unknown_field_in_assistant_produces_error() {
    let toml = r#"
[assistant]
naem = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("naem"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown field in [gemini] section is rejected.
#[test]
fn unknown_field_in_gemini_produces_error() {
    let toml = r#"
[gemini]
api_kye = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.assistant.name, "cetak");
    assert_eq!(config.assistant.default_language, "id");
    assert_eq!(config.assistant.log_level, "info");
    assert_eq!(config.assistant.history_turns, 7);
    assert_eq!(config.assistant.max_suggestions, 4);
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.gemini.text_timeout_secs, 10);
    assert_eq!(config.gemini.vision_timeout_secs, 15);
    assert_eq!(config.gemini.max_retries, 3);
    assert!(config.storage.wal_mode);
    assert_eq!(config.media.max_image_bytes, 5 * 1024 * 1024);
    assert_eq!(
        config.media.allowed_mime_types,
        vec!["image/jpeg", "image/png", "image/webp"]
    );
    assert!(!config.rfq.notifications_enabled);
    assert_eq!(config.rfq.smtp_port, 587);
    assert_eq!(config.business_hours.utc_offset_hours, 7);
    assert_eq!(config.business_hours.weekday_open, 9);
    assert_eq!(config.business_hours.weekday_close, 18);
    assert_eq!(config.business_hours.saturday_open, 10);
    assert_eq!(config.business_hours.saturday_close, 14);
}

/// Env-style dotted overrides take precedence over TOML values.
#[test]
fn override_takes_precedence_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[assistant]
name = "from-toml"
"#;

    let config: CetakConfig = Figment::new()
        .merge(Serialized::defaults(CetakConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("assistant.name", "envtest"))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.assistant.name, "envtest");
}

/// Dotted key `gemini.api_key` resolves into the nested section
/// (NOT gemini.api.key).
#[test]
fn dotted_api_key_maps_to_gemini_section() {
    use figment::{Figment, providers::Serialized};

    let config: CetakConfig = Figment::new()
        .merge(Serialized::defaults(CetakConfig::default()))
        .merge(("gemini.api_key", "xyz-from-env"))
        .extract()
        .expect("should set api_key via dot notation");

    assert_eq!(config.gemini.api_key.as_deref(), Some("xyz-from-env"));
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: CetakConfig = Figment::new()
        .merge(Serialized::defaults(CetakConfig::default()))
        .merge(Toml::file("/nonexistent/path/cetak.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.assistant.name, "cetak");
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[metrics]
enabled = true
"#;

    let err =
        load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("metrics"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unknown key "naem" in [assistant] produces suggestion "did you mean `name`?"
#[test]
fn diagnostic_naem_suggests_name() {
    let valid_keys = &["name", "default_language", "log_level"];
    let suggestion = suggest_key("naem", valid_keys);
    assert_eq!(suggestion, Some("name".to_string()));
}

/// Error output from load_and_validate_str includes the unknown key name.
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[assistant]
naem = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys } if {
            key == "naem"
                && suggestion.as_deref() == Some("name")
                && valid_keys.contains("name")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'naem' with suggestion 'name', got: {errors:?}"
    );
}

/// Invalid type (string where number expected) produces clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[assistant]
history_turns = "not_a_number"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("history_turns"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic (can be rendered).
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "naem".to_string(),
        suggestion: Some("name".to_string()),
        valid_keys: "name, default_language, log_level".to_string(),
    };

    let code = error.code();
    assert!(code.is_some(), "should have diagnostic code");

    let help = error.help();
    assert!(help.is_some(), "should have help text");
    let help_str = help.unwrap().to_string();
    assert!(
        help_str.contains("did you mean `name`"),
        "help should contain suggestion, got: {help_str}"
    );
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[assistant]
name = "test"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.assistant.name, "test");
}

/// Validation catches notifications enabled without an SMTP host.
#[test]
fn validation_catches_incomplete_rfq_config() {
    let toml = r#"
[rfq]
notifications_enabled = true
"#;

    let errors = load_and_validate_str(toml).expect_err("incomplete rfq config should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("smtp_host"))
    });
    assert!(
        has_validation_error,
        "should have validation error for missing smtp_host"
    );
}
