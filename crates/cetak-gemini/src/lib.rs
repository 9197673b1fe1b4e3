// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini API client for the Cetak assistant.
//!
//! Implements the [`ReplyGenerator`](cetak_core::traits::ReplyGenerator)
//! trait over the `generateContent` endpoint: prompt construction, per-call
//! timeouts, bounded retry on rate limiting, and heuristic post-processing
//! of vision replies.

pub mod client;
pub mod prompt;
pub mod types;
pub mod vision;

pub use client::GeminiClient;
