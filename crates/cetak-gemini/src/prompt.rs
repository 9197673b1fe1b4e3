// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for the generation endpoint.
//!
//! The persona preamble carries the company facts the model is allowed to
//! state; everything else in the reply should come from the user's input and
//! the embedded context. Only the most recent turns are inlined to keep the
//! prompt bounded.

use cetak_core::types::{ConversationTurn, Language};

/// How many recent exchanges are embedded as context.
const CONTEXT_TURNS: usize = 3;

const COMPANY_PROFILE: &str = "\
You are Emran Chatbot, the official AI assistant for PT. EMRAN GHANIM ASAHI, \
a premium printing and labeling company established in 2023 in Tangerang, Banten, Indonesia.

**COMPANY PROFILE:**
PT. EMRAN GHANIM ASAHI specializes in high-quality printing and labeling solutions \
for retail, fashion, and logistics industries. We offer UPC labels, stickers, books, \
calendars, brochures, polybags, barcode labels, hangtags, size labels, care labels, \
inboxes, screen printing, custom ribbons, and personalized stationery.

**KEY INFORMATION:**
- **Established:** April 3, 2023
- **Location:** The Avenue Block Z 06/36, Citra Raya, Cikupa, Tangerang
- **Contact:** Email: sales@emranghanimasahi.net | Phone: (021) 89088260 | Direct: Mr. Darmawan at 0813-9831-8839
- **Production Capacity:** Cutting machines (17,500 units/day), Offset printers (49,000 units/day), Sealing machines (35,000 units/day)";

/// Builds the prompt for a text exchange.
///
/// Embeds the last [`CONTEXT_TURNS`] exchanges and, for dynamic-prompt
/// catalog records, the operator-authored guidance text.
pub fn build_text_prompt(
    input: &str,
    language: Language,
    history: &[ConversationTurn],
    guidance: Option<&str>,
) -> String {
    let mut context_section = String::new();
    let recent = history.len().saturating_sub(CONTEXT_TURNS);
    if !history.is_empty() {
        context_section.push_str("\n**CONVERSATION CONTEXT:**\n");
        for (index, turn) in history[recent..].iter().enumerate() {
            context_section.push_str(&format!(
                "{}. Customer: \"{}\"\n   Assistant: \"{}\"\n",
                index + 1,
                turn.user_message,
                turn.bot_response
            ));
        }
    }

    let mut guidance_section = String::new();
    if let Some(text) = guidance {
        guidance_section = format!("\n**OPERATOR GUIDANCE:**\n{text}\n");
    }

    format!(
        "{COMPANY_PROFILE}

**RESPONSE GUIDELINES:**
1. **Language:** Respond strictly in {}
2. **Length:** Keep responses under 60 words, direct and helpful
3. **Tone:** Professional, friendly, customer-service oriented
4. **Accuracy:** Only state facts from the company profile
5. **Call-to-Action:** When appropriate, encourage contact for quotes or consultations
{context_section}{guidance_section}
**CURRENT CUSTOMER MESSAGE:** {input}",
        language.endpoint_name()
    )
}

/// Builds the prompt for the vision path.
pub fn build_image_prompt(user_message: &str, language: Language) -> String {
    format!(
        "{COMPANY_PROFILE}

**IMAGE ANALYSIS INSTRUCTIONS:**
1. Identify the visible design elements and the likely product category \
(business cards, brochures, banners, stickers, packaging, etc.)
2. Recommend appropriate materials and finishing from our portfolio
3. Give a rough price range in Indonesian Rupiah when possible
4. Keep the response under 80 words, specific and actionable
5. End with a call-to-action to contact us
6. Respond strictly in {}

**CUSTOMER MESSAGE:** {user_message}",
        language.endpoint_name()
    )
}
