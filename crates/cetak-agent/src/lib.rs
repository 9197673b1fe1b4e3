// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session orchestration for the Cetak assistant: the widget state machine,
//! the welcome greeting, and upload validation.

pub mod greeting;
pub mod media;
pub mod orchestrator;

pub use orchestrator::{Orchestrator, WidgetState};
