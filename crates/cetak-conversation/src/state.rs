// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation state and its transition rules.
//!
//! All session state lives in one struct mutated through [`Action`] values,
//! so every transition is inspectable and testable in isolation. The message
//! log grows monotonically within a session; the context window pairs each
//! bot reply with the preceding user message and is FIFO-truncated to a fixed
//! number of turns.

use std::collections::HashSet;

use cetak_core::types::{
    ConversationTurn, Message, MessageId, MessageStatus, Sender, SuggestionChip,
};

/// Default number of exchange pairs retained as generation context.
pub const DEFAULT_HISTORY_TURNS: usize = 7;

/// All mutable state of one assistant session.
#[derive(Debug, Clone)]
pub struct ConversationState {
    /// Full message log, append-only until a reset.
    pub messages: Vec<Message>,
    /// A text exchange is in flight.
    pub is_typing: bool,
    /// An image upload is in flight.
    pub is_image_uploading: bool,
    /// Current user-facing error banner, if any.
    pub error: Option<String>,
    /// Current suggestion chips.
    pub suggestions: Vec<SuggestionChip>,
    /// Suggestion texts already clicked this session.
    pub used_suggestions: HashSet<String>,
    /// Paired exchanges used as generation context, oldest first.
    pub history: Vec<ConversationTurn>,
    history_turns: usize,
}

/// A state transition.
#[derive(Debug, Clone)]
pub enum Action {
    AddMessage(Message),
    SetTyping(bool),
    SetImageUploading(bool),
    SetError(Option<String>),
    SetSuggestions(Vec<SuggestionChip>),
    AddUsedSuggestion(String),
    UpdateMessageStatus { id: MessageId, status: MessageStatus },
    ClearConversation,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_TURNS)
    }
}

impl ConversationState {
    /// An empty session keeping at most `history_turns` context pairs.
    pub fn new(history_turns: usize) -> Self {
        Self {
            messages: Vec::new(),
            is_typing: false,
            is_image_uploading: false,
            error: None,
            suggestions: Vec::new(),
            used_suggestions: HashSet::new(),
            history: Vec::new(),
            history_turns,
        }
    }

    /// Applies one transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddMessage(message) => self.add_message(message),
            Action::SetTyping(typing) => self.is_typing = typing,
            Action::SetImageUploading(uploading) => self.is_image_uploading = uploading,
            Action::SetError(error) => {
                // An error ends any in-flight exchange.
                self.error = error;
                self.is_typing = false;
                self.is_image_uploading = false;
            }
            Action::SetSuggestions(suggestions) => self.suggestions = suggestions,
            Action::AddUsedSuggestion(text) => {
                self.used_suggestions.insert(text);
            }
            Action::UpdateMessageStatus { id, status } => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                    message.status = Some(status);
                }
            }
            Action::ClearConversation => {
                let welcome = self.messages.first().cloned();
                *self = Self::new(self.history_turns);
                self.messages.extend(welcome);
            }
        }
    }

    /// True while either the text or the image path is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_typing || self.is_image_uploading
    }

    fn add_message(&mut self, message: Message) {
        // A bot reply closes the pending exchange: pair it with the most
        // recent user message and append to the context window.
        if message.sender == Sender::Bot {
            if let Some(user) = self
                .messages
                .iter()
                .rev()
                .find(|m| m.sender == Sender::User)
            {
                self.history.push(ConversationTurn {
                    user_message: user.text.clone(),
                    bot_response: message.text.clone(),
                    timestamp: message.timestamp,
                    has_image: user.has_image,
                });
                if self.history.len() > self.history_turns {
                    let excess = self.history.len() - self.history_turns;
                    self.history.drain(..excess);
                }
            }
        }
        self.messages.push(message);
        self.error = None;
    }
}
