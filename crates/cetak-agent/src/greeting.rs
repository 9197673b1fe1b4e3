// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time-of-day greeting and business-hours note for the welcome message.
//!
//! The office timezone is a fixed UTC offset from config. Never reads the
//! system clock directly; callers inject a [`Clock`].

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};

use cetak_config::model::BusinessHoursConfig;
use cetak_core::traits::clock::Clock;
use cetak_core::types::Language;

fn local_time(clock: &dyn Clock, hours: &BusinessHoursConfig) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(hours.utc_offset_hours * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    clock.now().with_timezone(&offset)
}

/// Time-of-day salutation for the local hour.
pub fn time_greeting(local_hour: u32, language: Language) -> &'static str {
    match language {
        Language::Id => match local_hour {
            5..=10 => "Selamat Pagi",
            11..=14 => "Selamat Siang",
            15..=17 => "Selamat Sore",
            _ => "Selamat Malam",
        },
        _ => match local_hour {
            5..=10 => "Good Morning",
            11..=14 => "Good Afternoon",
            15..=17 => "Good Evening",
            _ => "Good Evening",
        },
    }
}

/// Whether the office is open at the given local moment.
pub fn is_open(local: &DateTime<FixedOffset>, hours: &BusinessHoursConfig) -> bool {
    let hour = local.hour();
    match local.weekday() {
        Weekday::Sat => hour >= hours.saturday_open && hour < hours.saturday_close,
        Weekday::Sun => false,
        _ => hour >= hours.weekday_open && hour < hours.weekday_close,
    }
}

/// Full welcome message seeded at session start and after a reset.
pub fn welcome_message(
    clock: &dyn Clock,
    hours: &BusinessHoursConfig,
    language: Language,
) -> String {
    let local = local_time(clock, hours);
    let greeting = time_greeting(local.hour(), language);
    let open = is_open(&local, hours);

    match language {
        Language::Id => {
            let note = if open {
                "Tim kami sedang online dan siap membantu.".to_string()
            } else {
                format!(
                    "Saat ini di luar jam operasional (Senin-Jumat {:02}.00-{:02}.00, \
                     Sabtu {:02}.00-{:02}.00). Asisten kami tetap siap menjawab.",
                    hours.weekday_open, hours.weekday_close, hours.saturday_open,
                    hours.saturday_close
                )
            };
            format!(
                "{greeting}! Selamat datang di PT. EMRAN GHANIM ASAHI. {note} \
                 Ada yang bisa kami bantu untuk kebutuhan cetak Anda?"
            )
        }
        _ => {
            let note = if open {
                "Our team is online and ready to help.".to_string()
            } else {
                format!(
                    "We are currently outside business hours (Mon-Fri {:02}:00-{:02}:00, \
                     Sat {:02}:00-{:02}:00). The assistant is still happy to answer.",
                    hours.weekday_open, hours.weekday_close, hours.saturday_open,
                    hours.saturday_close
                )
            };
            format!(
                "{greeting}! Welcome to PT. EMRAN GHANIM ASAHI. {note} \
                 How can we help with your printing needs?"
            )
        }
    }
}
