// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session orchestrator tying catalog, generator, conversation state, and the
//! RFQ flow together.
//!
//! One orchestrator owns one conversation. Input handling is serialized: a
//! second submission while a request is in flight is rejected with a
//! `Validation` error instead of racing the first. Exactly one error banner
//! exists at a time; any new accepted input clears it.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use cetak_catalog::ResponseCatalog;
use cetak_config::model::{BusinessHoursConfig, CetakConfig, MediaConfig};
use cetak_conversation::state::{Action, ConversationState};
use cetak_conversation::suggest;
use cetak_core::CetakError;
use cetak_core::traits::clock::Clock;
use cetak_core::traits::generator::ReplyGenerator;
use cetak_core::types::{
    ImageAttachment, Language, Message, MessageStatus, ResponseType, RfqSubmission,
};
use cetak_rfq::{RfqDraft, RfqService};

use crate::greeting;
use crate::media;

/// What the assistant widget is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Waiting for user input.
    Idle,
    /// A text exchange is in flight.
    AwaitingReply,
    /// An image analysis is in flight.
    AwaitingImageAnalysis,
    /// The quote-request form is open.
    RfqFormOpen,
}

impl std::fmt::Display for WidgetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetState::Idle => write!(f, "idle"),
            WidgetState::AwaitingReply => write!(f, "awaiting_reply"),
            WidgetState::AwaitingImageAnalysis => write!(f, "awaiting_image_analysis"),
            WidgetState::RfqFormOpen => write!(f, "rfq_form_open"),
        }
    }
}

/// Drives one conversation over injected services.
pub struct Orchestrator {
    state: ConversationState,
    widget: WidgetState,
    history_turns: usize,
    generator: Arc<dyn ReplyGenerator>,
    catalog: ResponseCatalog,
    rfq: RfqService,
    clock: Arc<dyn Clock>,
    language: Language,
    media: MediaConfig,
    hours: BusinessHoursConfig,
}

impl Orchestrator {
    /// Build an orchestrator and seed the welcome message plus the initial
    /// suggestion set.
    pub fn new(
        generator: Arc<dyn ReplyGenerator>,
        catalog: ResponseCatalog,
        rfq: RfqService,
        clock: Arc<dyn Clock>,
        config: &CetakConfig,
    ) -> Self {
        let language =
            Language::from_str(&config.assistant.default_language).unwrap_or_default();
        let mut orchestrator = Self {
            state: ConversationState::new(config.assistant.history_turns),
            widget: WidgetState::Idle,
            history_turns: config.assistant.history_turns,
            generator,
            catalog,
            rfq,
            clock,
            language,
            media: config.media.clone(),
            hours: config.business_hours.clone(),
        };
        orchestrator.seed_welcome();
        orchestrator
    }

    /// Read-only view of the conversation.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn widget(&self) -> WidgetState {
        self.widget
    }

    pub fn language(&self) -> Language {
        self.language
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut ConversationState {
        &mut self.state
    }

    fn seed_welcome(&mut self) {
        let welcome =
            greeting::welcome_message(self.clock.as_ref(), &self.hours, self.language);
        self.state
            .apply(Action::AddMessage(Message::bot(welcome, self.clock.now())));
        self.state.apply(Action::SetSuggestions(
            suggest::dynamic_suggestions("", self.language, &self.state.used_suggestions, false),
        ));
    }

    fn busy_rejection(&self) -> CetakError {
        CetakError::Validation(match self.language {
            Language::Id => "Masih memproses pesan sebelumnya. Mohon tunggu sebentar.".to_string(),
            _ => "Still processing the previous message. Please wait a moment.".to_string(),
        })
    }

    /// Handle one typed message.
    ///
    /// Errors returned here mean the input was never accepted (empty text or
    /// a busy session) and no state changed. Failures after acceptance are
    /// surfaced as the error banner instead, with the user message left in
    /// `Sent` state for a manual retry.
    pub async fn submit_text(&mut self, text: &str) -> Result<(), CetakError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CetakError::Validation(match self.language {
                Language::Id => "Pesan tidak boleh kosong.".to_string(),
                _ => "Message cannot be empty.".to_string(),
            }));
        }
        if self.state.is_busy() {
            return Err(self.busy_rejection());
        }

        let user = Message::user(text, self.clock.now());
        let user_id = user.id.clone();
        self.state.apply(Action::AddMessage(user));
        self.state.apply(Action::SetTyping(true));
        self.widget = WidgetState::AwaitingReply;

        let matched = self.catalog.find_match(text).await;
        let (reply, opens_rfq) = match matched {
            Some(record) if record.response_type == ResponseType::Static => {
                debug!(id = %record.id, "catalog match (static)");
                (Ok(record.text_for(self.language).to_string()), false)
            }
            Some(record) if record.response_type == ResponseType::RfqTrigger => {
                debug!(id = %record.id, "catalog match (rfq trigger)");
                (Ok(record.text_for(self.language).to_string()), true)
            }
            other => {
                let guidance = other.map(|record| record.text_for(self.language).to_string());
                (
                    self.generator
                        .generate_text(
                            text,
                            self.language,
                            &self.state.history,
                            guidance.as_deref(),
                        )
                        .await,
                    false,
                )
            }
        };

        match reply {
            Ok(reply) => {
                self.state.apply(Action::UpdateMessageStatus {
                    id: user_id,
                    status: MessageStatus::Delivered,
                });
                self.state
                    .apply(Action::AddMessage(Message::bot(reply, self.clock.now())));
                self.state.apply(Action::SetTyping(false));
                if opens_rfq {
                    self.state.apply(Action::SetSuggestions(
                        suggest::rfq_suggestions(self.language),
                    ));
                    self.widget = WidgetState::RfqFormOpen;
                } else {
                    self.state.apply(Action::SetSuggestions(
                        suggest::dynamic_suggestions(
                            text,
                            self.language,
                            &self.state.used_suggestions,
                            false,
                        ),
                    ));
                    self.widget = WidgetState::Idle;
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "text generation failed");
                self.state.apply(Action::UpdateMessageStatus {
                    id: user_id,
                    status: MessageStatus::Sent,
                });
                self.state
                    .apply(Action::SetError(Some(err.user_message(self.language))));
                self.widget = WidgetState::Idle;
                Ok(())
            }
        }
    }

    /// Handle one image upload with an optional caption.
    ///
    /// Validation runs before any message is appended or network call made;
    /// a rejected upload leaves the conversation untouched.
    pub async fn submit_image(
        &mut self,
        image: ImageAttachment,
        note: &str,
    ) -> Result<(), CetakError> {
        if self.state.is_busy() {
            return Err(self.busy_rejection());
        }
        media::validate_image(&image, &self.media, self.language)?;

        let caption = if note.trim().is_empty() {
            image.file_name.clone()
        } else {
            note.trim().to_string()
        };
        let user = Message::user_with_image(
            caption.clone(),
            self.clock.now(),
            image.file_name.clone(),
            image.file_name.clone(),
        );
        let user_id = user.id.clone();
        self.state.apply(Action::AddMessage(user));
        self.state.apply(Action::SetImageUploading(true));
        self.widget = WidgetState::AwaitingImageAnalysis;

        match self
            .generator
            .analyze_image(&image, note.trim(), self.language)
            .await
        {
            Ok(outcome) => {
                self.state.apply(Action::UpdateMessageStatus {
                    id: user_id,
                    status: MessageStatus::Delivered,
                });
                self.state.apply(Action::AddMessage(Message::bot(
                    outcome.reply,
                    self.clock.now(),
                )));
                self.state.apply(Action::SetImageUploading(false));
                self.state.apply(Action::SetSuggestions(
                    suggest::dynamic_suggestions(
                        &caption,
                        self.language,
                        &self.state.used_suggestions,
                        true,
                    ),
                ));
                self.widget = WidgetState::Idle;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "image analysis failed");
                self.state.apply(Action::UpdateMessageStatus {
                    id: user_id,
                    status: MessageStatus::Sent,
                });
                self.state
                    .apply(Action::SetError(Some(err.user_message(self.language))));
                self.widget = WidgetState::Idle;
                Ok(())
            }
        }
    }

    /// Handle a clicked suggestion chip: record the text as used so it is not
    /// offered again, then treat it as typed input.
    pub async fn select_suggestion(&mut self, chip_text: &str) -> Result<(), CetakError> {
        if self.state.is_busy() {
            return Err(self.busy_rejection());
        }
        self.state
            .apply(Action::AddUsedSuggestion(chip_text.to_string()));
        self.submit_text(chip_text).await
    }

    /// Submit the quote-request form.
    ///
    /// On success a confirmation message naming the submission reference is
    /// appended and the form closes. On failure the form stays open, the
    /// caller keeps the draft, and the error banner is set.
    pub async fn submit_rfq(&mut self, draft: &RfqDraft) -> Result<RfqSubmission, CetakError> {
        if self.state.is_busy() {
            return Err(self.busy_rejection());
        }

        match self.rfq.submit(draft.clone()).await {
            Ok(submission) => {
                let confirmation = match self.language {
                    Language::Id => format!(
                        "Terima kasih, {}! Permintaan penawaran Anda sudah kami terima \
                         dengan nomor referensi {}. Tim sales kami akan menghubungi Anda \
                         melalui {}.",
                        submission.user_name, submission.id, submission.user_email
                    ),
                    _ => format!(
                        "Thank you, {}! Your quote request has been received under \
                         reference {}. Our sales team will contact you at {}.",
                        submission.user_name, submission.id, submission.user_email
                    ),
                };
                self.state
                    .apply(Action::AddMessage(Message::bot(confirmation, self.clock.now())));
                self.state.apply(Action::SetSuggestions(
                    suggest::dynamic_suggestions(
                        "",
                        self.language,
                        &self.state.used_suggestions,
                        false,
                    ),
                ));
                self.widget = WidgetState::Idle;
                Ok(submission)
            }
            Err(err) => {
                self.state
                    .apply(Action::SetError(Some(err.user_message(self.language))));
                Err(err)
            }
        }
    }

    /// Close the quote-request form without submitting.
    pub fn close_rfq_form(&mut self) {
        if self.widget == WidgetState::RfqFormOpen {
            self.widget = WidgetState::Idle;
        }
    }

    /// Clear the conversation back to a fresh welcome state. Idempotent.
    pub fn reset(&mut self) {
        self.state = ConversationState::new(self.history_turns);
        self.widget = WidgetState::Idle;
        self.seed_welcome();
    }
}
