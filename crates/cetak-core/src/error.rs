// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Cetak assistant.

use thiserror::Error;

use crate::types::Language;

/// The primary error type used across all Cetak services and core operations.
#[derive(Debug, Error)]
pub enum CetakError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Input rejected before any network call (empty text, oversized or
    /// wrong-type image, malformed RFQ field).
    #[error("validation error: {0}")]
    Validation(String),

    /// Generative endpoint errors, classified at the HTTP boundary.
    #[error(transparent)]
    Generative(#[from] GenerativeError),

    /// RFQ persistence failure. The draft is preserved by the caller so the
    /// user can retry without re-entering data.
    #[error("submission error: {message}")]
    Submission {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CetakError {
    /// Localized, human-readable message suitable for the chat error banner.
    pub fn user_message(&self, language: Language) -> String {
        match self {
            CetakError::Generative(e) => e.user_message(language),
            CetakError::Validation(msg) => msg.clone(),
            CetakError::Submission { .. } => match language {
                Language::Id => "Maaf, terjadi kesalahan saat mengirim RFQ Anda. \
                                 Silakan coba lagi atau hubungi kami langsung di (021) 89088260."
                    .to_string(),
                _ => "Sorry, there was an error submitting your RFQ. \
                      Please try again or contact us directly at (021) 89088260."
                    .to_string(),
            },
            _ => match language {
                Language::Id => "Terjadi kesalahan sistem. Silakan hubungi dukungan teknis."
                    .to_string(),
                _ => "A system error occurred. Please contact technical support.".to_string(),
            },
        }
    }
}

/// Classification of generation-endpoint failures.
///
/// Built from the HTTP status immediately after the call returns; raw JSON
/// access never leaks past the client boundary. Only `RateLimited` is ever
/// retried, and only inside the client.
#[derive(Debug, Error)]
pub enum GenerativeError {
    /// HTTP 400: the request itself was malformed or rejected.
    #[error("generation endpoint rejected the request")]
    BadRequest,

    /// HTTP 401/403: key missing, expired, or not authorized.
    #[error("generation endpoint authentication failed")]
    Auth,

    /// HTTP 429 on every attempt up to the retry limit.
    #[error("rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// HTTP 500/503: the endpoint is up but unable to serve.
    #[error("generation endpoint unavailable")]
    ServerUnavailable,

    /// Connection-level failure: DNS, TCP, TLS, or request timeout.
    #[error("could not reach generation endpoint: {source}")]
    Network {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 2xx response with no candidate text.
    #[error("generation endpoint returned no candidate text")]
    EmptyResponse,

    /// Any other HTTP status.
    #[error("generation endpoint returned unexpected status {status}")]
    Unknown { status: u16 },
}

impl GenerativeError {
    /// Localized, user-facing message for this failure.
    ///
    /// Only English and Indonesian are authored; other languages fall back to
    /// English, mirroring the catalog's base-language fallback.
    pub fn user_message(&self, language: Language) -> String {
        let id = matches!(language, Language::Id);
        match self {
            GenerativeError::BadRequest => if id {
                "Permintaan tidak valid. Silakan coba dengan pertanyaan yang berbeda."
            } else {
                "Invalid request. Please try asking a different question."
            }
            .to_string(),
            GenerativeError::Auth => if id {
                "Terjadi masalah autentikasi. Silakan hubungi dukungan teknis."
            } else {
                "There was an authentication problem. Please contact technical support."
            }
            .to_string(),
            GenerativeError::RateLimited { .. } => if id {
                "Terlalu banyak permintaan. Silakan tunggu sebentar dan coba lagi."
            } else {
                "Too many requests. Please wait a moment and try again."
            }
            .to_string(),
            GenerativeError::ServerUnavailable => if id {
                "Server AI sedang mengalami gangguan. Silakan hubungi kami di (021) 89088260."
            } else {
                "The AI server is experiencing issues. Please contact us at (021) 89088260."
            }
            .to_string(),
            GenerativeError::Network { .. } => if id {
                "Tidak dapat terhubung ke server AI. Periksa koneksi internet Anda."
            } else {
                "Could not connect to the AI server. Please check your internet connection."
            }
            .to_string(),
            GenerativeError::EmptyResponse => if id {
                "Asisten tidak memberikan jawaban. Silakan coba lagi."
            } else {
                "The assistant returned an empty reply. Please try again."
            }
            .to_string(),
            GenerativeError::Unknown { .. } => if id {
                "Terjadi kesalahan tak terduga. Silakan hubungi kami di (021) 89088260."
            } else {
                "An unexpected error occurred. Please contact us at (021) 89088260."
            }
            .to_string(),
        }
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, attempts: u32) -> Self {
        match status {
            400 => GenerativeError::BadRequest,
            401 | 403 => GenerativeError::Auth,
            429 => GenerativeError::RateLimited { attempts },
            500 | 503 => GenerativeError::ServerUnavailable,
            other => GenerativeError::Unknown { status: other },
        }
    }
}
