// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cached content layer for the Cetak assistant.
//!
//! Wraps the content store with short-lived caches: the keyword-response
//! catalog and the tunable generation parameters.

pub mod ai_config;
pub mod catalog;

pub use ai_config::AiConfigLoader;
pub use catalog::ResponseCatalog;
