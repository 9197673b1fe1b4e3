// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./cetak.toml` > `~/.config/cetak/cetak.toml` > `/etc/cetak/cetak.toml`
//! with environment variable overrides via `CETAK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::CetakConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/cetak/cetak.toml` (system-wide)
/// 3. `~/.config/cetak/cetak.toml` (user XDG config)
/// 4. `./cetak.toml` (local directory)
/// 5. `CETAK_*` environment variables
pub fn load_config() -> Result<CetakConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CetakConfig::default()))
        .merge(Toml::file("/etc/cetak/cetak.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("cetak/cetak.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("cetak.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<CetakConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CetakConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CetakConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CetakConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `CETAK_GEMINI_API_KEY` must
/// map to `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("CETAK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: CETAK_GEMINI_API_KEY -> "gemini_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("assistant_", "assistant.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("media_", "media.", 1)
            .replacen("rfq_", "rfq.", 1)
            .replacen("business_hours_", "business_hours.", 1);
        mapped.into()
    })
}
