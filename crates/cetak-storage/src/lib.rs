// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Cetak assistant.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, typed CRUD operations for the
//! response catalog, AI runtime parameters, and quote requests, plus a
//! filesystem object store for uploaded design files.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod objects;
pub mod queries;

pub use adapter::SqliteContentStore;
pub use database::Database;
pub use objects::FsObjectStore;
