// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Follow-up suggestion chips.
//!
//! Chips are picked from fixed per-category pools keyed on the last input's
//! keywords. Texts already clicked this session are skipped; when a category
//! pool runs low it is topped up from the general pool. English and
//! Indonesian pools are authored; other languages use the English pools.

use std::collections::HashSet;

use cetak_core::types::{Language, SuggestionCategory, SuggestionChip};

/// Default maximum number of chips offered at once.
pub const MAX_SUGGESTIONS: usize = 4;

/// A category pool is topped up from the general pool below this count.
const TOP_UP_THRESHOLD: usize = 3;

struct Pools {
    printing: &'static [&'static str],
    services: &'static [&'static str],
    pricing: &'static [&'static str],
    contact: &'static [&'static str],
    general: &'static [&'static str],
    image: &'static [&'static str],
}

const POOLS_EN: Pools = Pools {
    printing: &[
        "Digital printing options",
        "Offset printing details",
        "Large format printing",
        "Printing materials",
        "Turnaround times",
        "Quality standards",
    ],
    services: &[
        "Design services",
        "Packaging solutions",
        "Business cards",
        "Brochures & flyers",
        "Custom printing",
        "Finishing options",
    ],
    pricing: &[
        "Get a quote",
        "Bulk discounts",
        "Payment terms",
        "Delivery costs",
        "Rush order pricing",
        "Package deals",
    ],
    contact: &[
        "Office location",
        "Business hours",
        "Contact methods",
        "Visit our facility",
        "Schedule consultation",
        "Customer support",
    ],
    general: &[
        "About our company",
        "Our experience",
        "Quality guarantee",
        "Client testimonials",
        "Portfolio samples",
        "Why choose us",
    ],
    image: &[
        "Request detailed quote",
        "Similar printing options",
        "Material recommendations",
        "Quality improvements",
        "Cost optimization",
        "Production timeline",
    ],
};

const POOLS_ID: Pools = Pools {
    printing: &[
        "Opsi cetak digital",
        "Detail cetak offset",
        "Cetak format besar",
        "Bahan cetak",
        "Waktu pengerjaan",
        "Standar kualitas",
    ],
    services: &[
        "Layanan desain",
        "Solusi kemasan",
        "Kartu nama",
        "Brosur & flyer",
        "Cetak kustom",
        "Opsi finishing",
    ],
    pricing: &[
        "Minta penawaran",
        "Diskon volume",
        "Syarat pembayaran",
        "Biaya pengiriman",
        "Harga rush order",
        "Paket hemat",
    ],
    contact: &[
        "Lokasi kantor",
        "Jam operasional",
        "Cara kontak",
        "Kunjungi fasilitas",
        "Jadwal konsultasi",
        "Dukungan pelanggan",
    ],
    general: &[
        "Tentang perusahaan",
        "Pengalaman kami",
        "Jaminan kualitas",
        "Testimoni klien",
        "Contoh portfolio",
        "Mengapa pilih kami",
    ],
    image: &[
        "Minta penawaran detail",
        "Opsi cetak serupa",
        "Rekomendasi material",
        "Peningkatan kualitas",
        "Optimasi biaya",
        "Timeline produksi",
    ],
};

fn pools_for(language: Language) -> &'static Pools {
    match language {
        Language::Id => &POOLS_ID,
        _ => &POOLS_EN,
    }
}

fn pick_category(last_input: &str, has_image: bool) -> SuggestionCategory {
    let lower = last_input.to_lowercase();
    if has_image {
        SuggestionCategory::Image
    } else if lower.contains("print") || lower.contains("cetak") {
        SuggestionCategory::Printing
    } else if lower.contains("service") || lower.contains("layanan") {
        SuggestionCategory::Services
    } else if lower.contains("price")
        || lower.contains("cost")
        || lower.contains("harga")
        || lower.contains("biaya")
    {
        SuggestionCategory::Pricing
    } else if lower.contains("contact") || lower.contains("kontak") || lower.contains("hubungi") {
        SuggestionCategory::Contact
    } else {
        SuggestionCategory::General
    }
}

/// Generates up to [`MAX_SUGGESTIONS`] chips for the next exchange.
///
/// The category is picked from the last input's keywords, with image uploads
/// taking precedence. Used texts are skipped; a depleted category pool is
/// topped up from the general pool.
pub fn dynamic_suggestions(
    last_input: &str,
    language: Language,
    used: &HashSet<String>,
    has_image: bool,
) -> Vec<SuggestionChip> {
    let pools = pools_for(language);
    let category = pick_category(last_input, has_image);
    let pool = match category {
        SuggestionCategory::Printing => pools.printing,
        SuggestionCategory::Services => pools.services,
        SuggestionCategory::Pricing => pools.pricing,
        SuggestionCategory::Contact => pools.contact,
        SuggestionCategory::Image => pools.image,
        _ => pools.general,
    };

    let mut available: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|text| !used.contains(*text))
        .collect();

    if available.len() < TOP_UP_THRESHOLD {
        let top_up: Vec<&str> = pools
            .general
            .iter()
            .copied()
            .filter(|text| !used.contains(*text) && !available.contains(text))
            .collect();
        available.extend(top_up);
    }

    available
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|text| SuggestionChip::new(text, category))
        .collect()
}

/// Chips offered when the RFQ sub-flow is triggered.
pub fn rfq_suggestions(language: Language) -> Vec<SuggestionChip> {
    let texts: &[&str] = match language {
        Language::Id => &[
            "Ya, saya ingin RFQ",
            "Berapa estimasi harga?",
            "Apa saja yang dibutuhkan?",
            "Berapa lama prosesnya?",
        ],
        _ => &[
            "Yes, I want an RFQ",
            "What's the estimated price?",
            "What information is needed?",
            "How long does it take?",
        ],
    };
    texts
        .iter()
        .map(|text| SuggestionChip::new(*text, SuggestionCategory::Rfq))
        .collect()
}
