// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Cetak assistant.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Cetak workspace. All injectable services
//! implement traits defined here.

pub mod cache;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use cache::TtlCache;
pub use error::{CetakError, GenerativeError};
pub use types::{AdapterType, HealthStatus, Language, MessageId};

// Re-export all service traits at crate root.
pub use traits::{
    Clock, ContentStore, Notifier, ObjectStore, ReplyGenerator, ServiceAdapter, SystemClock,
};
