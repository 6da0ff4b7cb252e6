//! Prompt construction. Each builder produces a deterministic-shape string;
//! missing request fields are substituted with fixed fallback text rather
//! than rejected.

use hearth_types::api::GenerationRequest;

pub const SUMMARY_SYSTEM: &str =
    "You are a professional real estate agent creating personalized property listings.";

pub const ANALYST_SYSTEM: &str = "You are a real estate market analyst.";

const DEFAULT_CHAT_SYSTEM: &str =
    "You are a real estate AI assistant. Help users find and understand property listings.";

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

/// System message for the chat endpoint. A caller-supplied context replaces
/// the default guidance but keeps the assistant framing.
pub fn chat_system_message(context: Option<&str>) -> String {
    match context {
        Some(ctx) if !ctx.trim().is_empty() => {
            format!("You are a real estate AI assistant. {}", ctx)
        }
        _ => DEFAULT_CHAT_SYSTEM.to_string(),
    }
}

pub fn listing_summary_prompt(req: &GenerationRequest) -> String {
    let listings = if req.listing_urls.is_empty() {
        "No listings provided".to_string()
    } else {
        req.listing_urls.join("\n")
    };

    format!(
        "You are an AI assistant helping real estate agents generate personalized \
listing summaries for their clients.
Create a message that is engaging, informative, and formatted clearly.

**Client Name:** {client}
**Summary Title:** {title}
**Listings:**
{listings}
**Client Preferences:** {preferences}
**Message Style:** {style}
**Call-to-Action:** {cta}

### Instructions:
- Use a professional yet friendly tone.
- Clearly highlight key property features like price, location, and special amenities.
- Use bullet points for listing details.
- Include a warm closing and call to action.

**Generate the message below:**",
        client = or_fallback(&req.client_name, "No name provided"),
        title = or_fallback(&req.summary_title, "Handpicked Listings for You"),
        listings = listings,
        preferences = or_fallback(&req.preferences, "No specific preferences"),
        style = req.message_style,
        cta = req.cta,
    )
}

pub fn analysis_prompt(details: &str) -> String {
    format!(
        "Analyze the following property details and provide:
1. Property recommendations
2. Market analysis
3. Estimated price range

Property Details:
{details}

Provide the response in JSON format with the following structure:
{{
  \"recommendations\": string[],
  \"marketAnalysis\": string,
  \"priceEstimate\": {{
    \"value\": number,
    \"range\": {{
      \"min\": number,
      \"max\": number
    }}
  }}
}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompt_substitutes_fallbacks() {
        let prompt = listing_summary_prompt(&GenerationRequest::default());
        assert!(prompt.contains("**Client Name:** No name provided"));
        assert!(prompt.contains("**Summary Title:** Handpicked Listings for You"));
        assert!(prompt.contains("No listings provided"));
        assert!(prompt.contains("**Client Preferences:** No specific preferences"));
    }

    #[test]
    fn summary_prompt_keeps_provided_fields() {
        let req = GenerationRequest {
            client_name: "Dana".into(),
            summary_title: "Spring Picks".into(),
            listing_urls: vec!["https://a.example".into(), "https://b.example".into()],
            preferences: "quiet street".into(),
            message_style: "warm".into(),
            cta: "Call me today".into(),
        };
        let prompt = listing_summary_prompt(&req);
        assert!(prompt.contains("**Client Name:** Dana"));
        assert!(prompt.contains("https://a.example\nhttps://b.example"));
        assert!(prompt.contains("**Call-to-Action:** Call me today"));
    }

    #[test]
    fn chat_system_message_uses_context_when_given() {
        assert_eq!(
            chat_system_message(Some("Focus on lofts.")),
            "You are a real estate AI assistant. Focus on lofts."
        );
        assert_eq!(chat_system_message(None), DEFAULT_CHAT_SYSTEM);
        assert_eq!(chat_system_message(Some("   ")), DEFAULT_CHAT_SYSTEM);
    }

    #[test]
    fn analysis_prompt_embeds_details_and_shape() {
        let prompt = analysis_prompt("3bd condo near the beach");
        assert!(prompt.contains("3bd condo near the beach"));
        assert!(prompt.contains("\"marketAnalysis\""));
        assert!(prompt.contains("\"priceEstimate\""));
    }
}
