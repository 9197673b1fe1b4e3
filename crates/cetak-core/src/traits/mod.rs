// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service traits implemented by the injectable parts of the assistant.

pub mod adapter;
pub mod clock;
pub mod content;
pub mod generator;
pub mod notify;
pub mod objects;

pub use adapter::ServiceAdapter;
pub use clock::{Clock, SystemClock};
pub use content::ContentStore;
pub use generator::ReplyGenerator;
pub use notify::Notifier;
pub use objects::ObjectStore;
