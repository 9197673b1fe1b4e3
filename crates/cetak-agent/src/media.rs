// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upload validation for image attachments.
//!
//! Runs before any message is appended or network call is made, so a
//! rejected upload leaves no trace in the conversation.

use cetak_config::model::MediaConfig;
use cetak_core::CetakError;
use cetak_core::types::{ImageAttachment, Language};

/// Validate MIME type and size against the media config.
pub fn validate_image(
    image: &ImageAttachment,
    media: &MediaConfig,
    language: Language,
) -> Result<(), CetakError> {
    let id = matches!(language, Language::Id);

    let allowed = media
        .allowed_mime_types
        .iter()
        .any(|m| m.eq_ignore_ascii_case(&image.mime_type));
    if !allowed {
        return Err(CetakError::Validation(if id {
            format!(
                "Format gambar tidak didukung ({}). Gunakan JPEG, PNG, atau WebP.",
                image.mime_type
            )
        } else {
            format!(
                "Unsupported image format ({}). Please use JPEG, PNG, or WebP.",
                image.mime_type
            )
        }));
    }

    if image.bytes.len() > media.max_image_bytes {
        let limit_mb = media.max_image_bytes as f64 / (1024.0 * 1024.0);
        return Err(CetakError::Validation(if id {
            format!("Ukuran gambar melebihi batas {limit_mb:.0} MB.")
        } else {
            format!("Image exceeds the {limit_mb:.0} MB size limit.")
        }));
    }

    Ok(())
}
