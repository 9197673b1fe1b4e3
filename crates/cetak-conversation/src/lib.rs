// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation state machine and suggestion chips for the Cetak assistant.

pub mod state;
pub mod suggest;

pub use state::{Action, ConversationState, DEFAULT_HISTORY_TURNS};
pub use suggest::{MAX_SUGGESTIONS, dynamic_suggestions, rfq_suggestions};
