// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quote-request (RFQ) submission flow: draft validation, design-file
//! upload, persistence, and the best-effort sales notification.

pub mod draft;
pub mod notify;
pub mod service;

pub use draft::{DesignFile, RfqDraft};
pub use notify::SmtpNotifier;
pub use service::RfqService;
