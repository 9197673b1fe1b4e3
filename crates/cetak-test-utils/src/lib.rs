// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Cetak integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests without
//! external services.
//!
//! # Components
//!
//! - [`MockGenerator`] - Mock reply generator with pre-configured outcomes
//! - [`MemoryContentStore`] / [`MemoryObjectStore`] - In-memory stores with failure injection
//! - [`RecordingNotifier`] - Captures notified quote requests
//! - [`FixedClock`] - Pinnable time source

pub mod fixed_clock;
pub mod memory_store;
pub mod mock_generator;
pub mod recording_notifier;

pub use fixed_clock::FixedClock;
pub use memory_store::{MemoryContentStore, MemoryObjectStore};
pub use mock_generator::{MockGenerator, RecordedCall};
pub use recording_notifier::RecordingNotifier;
