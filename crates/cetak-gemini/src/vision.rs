// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic post-processing of vision replies.
//!
//! The model returns prose; this module scans it for product keywords and
//! attaches material recommendations and a rough cost estimate from the
//! company's printing tables. The result is best-effort metadata, not an
//! independent analysis of the image.

use cetak_core::types::{
    CostEstimate, ImageAnalysis, MaterialRecommendation, PrintingType, ProductCategory,
};

/// Default quantity used for the attached cost estimate.
const ESTIMATE_QUANTITY: u32 = 100;

/// Base cost per unit in IDR before material and volume factors.
const BASE_UNIT_COST_IDR: f64 = 1000.0;

struct Material {
    name: &'static str,
    description: &'static str,
    categories: &'static [ProductCategory],
    finishing_options: &'static [&'static str],
    durability: u32,
    cost_factor: f64,
}

/// The stock materials offered for each product category.
const PRINTING_MATERIALS: &[Material] = &[
    Material {
        name: "Art Paper 120gsm",
        description: "High-quality coated paper with smooth finish",
        categories: &[ProductCategory::BusinessCards, ProductCategory::Brochures],
        finishing_options: &["lamination", "spot-uv", "embossing"],
        durability: 7,
        cost_factor: 1.0,
    },
    Material {
        name: "Art Paper 150gsm",
        description: "Premium coated paper for professional materials",
        categories: &[ProductCategory::BusinessCards, ProductCategory::Brochures],
        finishing_options: &["lamination", "spot-uv", "embossing", "foiling"],
        durability: 8,
        cost_factor: 1.2,
    },
    Material {
        name: "Vinyl Banner Material",
        description: "Weather-resistant vinyl for outdoor applications",
        categories: &[ProductCategory::Banners],
        finishing_options: &["grommets", "hemming", "welding"],
        durability: 9,
        cost_factor: 1.5,
    },
    Material {
        name: "Fabric Textile",
        description: "Premium fabric for elegant displays",
        categories: &[ProductCategory::Banners],
        finishing_options: &["hemming", "pole-pockets", "grommets"],
        durability: 7,
        cost_factor: 2.0,
    },
    Material {
        name: "Adhesive Vinyl",
        description: "Self-adhesive vinyl for stickers and labels",
        categories: &[ProductCategory::Stickers],
        finishing_options: &["die-cutting", "kiss-cutting", "lamination"],
        durability: 6,
        cost_factor: 1.1,
    },
];

/// Material recommendations for a product category.
///
/// Suitability is the material's durability rating scaled to 0..=1.
pub fn recommendations_for(category: ProductCategory) -> Vec<MaterialRecommendation> {
    PRINTING_MATERIALS
        .iter()
        .filter(|m| m.categories.contains(&category))
        .map(|m| MaterialRecommendation {
            material: m.name.to_string(),
            description: m.description.to_string(),
            suitability: f64::from(m.durability) / 10.0,
            finishing_options: m
                .finishing_options
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
        .collect()
}

/// Rough price range for `quantity` units of a named material.
///
/// Volume discounts kick in at 500 (x0.9) and 1000 (x0.8) units; the upper
/// bound adds 30% for design complexity.
pub fn estimate_cost(material_name: &str, quantity: u32) -> CostEstimate {
    let Some(material) = PRINTING_MATERIALS.iter().find(|m| m.name == material_name) else {
        return CostEstimate {
            min_price: 0,
            max_price: 0,
            currency: "IDR".to_string(),
            factors: vec!["Material not found".to_string()],
        };
    };

    let mut multiplier = material.cost_factor;
    let mut factors = vec![format!("Base material: {material_name}")];

    if quantity >= 1000 {
        multiplier *= 0.8;
        factors.push("Volume discount (1000+)".to_string());
    } else if quantity >= 500 {
        multiplier *= 0.9;
        factors.push("Volume discount (500+)".to_string());
    }

    let total_min = BASE_UNIT_COST_IDR * multiplier * f64::from(quantity);
    let total_max = total_min * 1.3;

    CostEstimate {
        min_price: total_min.round() as i64,
        max_price: total_max.round() as i64,
        currency: "IDR".to_string(),
        factors,
    }
}

/// Scans a vision reply for product keywords and builds the analysis.
///
/// First keyword family found wins; an unmatched reply keeps the `General`
/// category with no recommendations.
pub fn analyze_reply(reply: &str) -> ImageAnalysis {
    let lower = reply.to_lowercase();

    let detected = if lower.contains("kartu nama") || lower.contains("business card") {
        Some((ProductCategory::BusinessCards, PrintingType::Digital))
    } else if lower.contains("brosur") || lower.contains("brochure") {
        Some((ProductCategory::Brochures, PrintingType::Offset))
    } else if lower.contains("banner") || lower.contains("spanduk") {
        Some((ProductCategory::Banners, PrintingType::LargeFormat))
    } else if lower.contains("stiker") || lower.contains("sticker") {
        Some((ProductCategory::Stickers, PrintingType::Digital))
    } else {
        None
    };

    let mut analysis = ImageAnalysis::default();
    if let Some((category, printing_type)) = detected {
        analysis.product_category = category;
        analysis.printing_type = printing_type;
        analysis.materials = recommendations_for(category);
        if let Some(first) = analysis.materials.first() {
            analysis.cost_estimate = Some(estimate_cost(&first.material, ESTIMATE_QUANTITY));
        }
    }
    analysis
}
