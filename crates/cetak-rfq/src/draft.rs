// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quote-request drafts and field validation.
//!
//! A draft is everything the user entered in the RFQ form, validated before
//! any upload or persistence happens. Validation failures carry messages in
//! the draft's language, ready for the chat error banner.

use std::sync::OnceLock;

use regex::Regex;

use cetak_core::CetakError;
use cetak_core::types::Language;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;

/// One design file attached to a draft.
#[derive(Debug, Clone)]
pub struct DesignFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A quote request as entered by the user, not yet persisted.
#[derive(Debug, Clone, Default)]
pub struct RfqDraft {
    pub user_name: String,
    pub user_email: String,
    pub project_name: String,
    pub product_category: Option<String>,
    pub size_specifications: String,
    pub quantity: i64,
    pub deadline: Option<String>,
    pub design_files: Vec<DesignFile>,
    pub additional_notes: Option<String>,
    pub estimated_cost_min: Option<i64>,
    pub estimated_cost_max: Option<i64>,
    pub language: Language,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid pattern"))
}

impl RfqDraft {
    /// Validates every user-entered field.
    ///
    /// Returns the first failure as a `Validation` error with a localized
    /// message.
    pub fn validate(&self) -> Result<(), CetakError> {
        let id = matches!(self.language, Language::Id);

        let name = self.user_name.trim();
        if name.len() < NAME_MIN || name.len() > NAME_MAX {
            return Err(CetakError::Validation(
                if id {
                    "Nama harus antara 2 dan 100 karakter."
                } else {
                    "Name must be between 2 and 100 characters."
                }
                .to_string(),
            ));
        }

        if !email_pattern().is_match(self.user_email.trim()) {
            return Err(CetakError::Validation(
                if id {
                    "Alamat email tidak valid."
                } else {
                    "The email address is not valid."
                }
                .to_string(),
            ));
        }

        if self.project_name.trim().is_empty() {
            return Err(CetakError::Validation(
                if id {
                    "Nama proyek wajib diisi."
                } else {
                    "Project name is required."
                }
                .to_string(),
            ));
        }

        if self.size_specifications.trim().is_empty() {
            return Err(CetakError::Validation(
                if id {
                    "Spesifikasi ukuran wajib diisi."
                } else {
                    "Size specifications are required."
                }
                .to_string(),
            ));
        }

        if self.quantity < 1 {
            return Err(CetakError::Validation(
                if id {
                    "Jumlah minimal 1."
                } else {
                    "Quantity must be at least 1."
                }
                .to_string(),
            ));
        }

        Ok(())
    }
}
