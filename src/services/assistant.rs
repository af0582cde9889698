// src/services/assistant.rs
//
// Canned chat replies keyed by keyword. First matching topic wins.

pub const WELCOME: &str = "Hello! I'm AtogGPT, your AI real estate assistant. I can help you find properties, calculate mortgages, explore neighborhoods, and answer questions about the real estate market. How can I assist you today?";

const FIND_PROPERTIES: &str = "I'd be happy to help you find properties! Based on current listings in Downtown Dubai, we have:\n\n\u{2022} **Studio apartments** starting from AED 750K\n\u{2022} **1-bedroom apartments** from AED 1.2M\n\u{2022} **2-bedroom apartments** from AED 2M\n\u{2022} **Penthouses** from AED 8M\n\nWould you like me to filter by specific criteria like price range, size, or amenities?";

const MORTGAGE: &str = "For a 2M AED property with typical financing terms:\n\n**Down Payment (20%)**: AED 400,000\n**Loan Amount**: AED 1,600,000\n**Monthly Payment (25 years @ 4.5%)**: ~AED 8,880\n\nThis is an estimate. Actual rates may vary based on your profile. Would you like me to connect you with a mortgage advisor?";

const FAMILIES: &str = "Here are the best family-friendly areas:\n\n1. **Arabian Ranches** - Excellent schools, parks, golf course\n2. **Dubai Hills Estate** - New community with great amenities\n3. **Jumeirah** - Close to beaches and schools\n4. **DAMAC Hills** - Affordable with good facilities\n\nEach area has different price points. Would you like details on any specific area?";

const MARKET: &str = "**2024 Market Highlights:**\n\n\u{2022} Average prices up 12% YoY\n\u{2022} Off-plan sales increased by 35%\n\u{2022} Dubai Marina remains top choice for rentals\n\u{2022} Palm Jumeirah saw highest appreciation\n\nThe market shows strong momentum with continued investor interest. Want specific insights on any area?";

const FALLBACK: &str = "I understand you're interested in real estate. Could you tell me more specifically what you're looking for? I can help with:\n\n\u{2022} Property search (buy/rent)\n\u{2022} Area recommendations\n\u{2022} Price trends and market data\n\u{2022} Mortgage calculations\n\u{2022} Agent connections";

pub const QUICK_PROMPTS: [&str; 4] = [
    "Find properties for sale in Downtown",
    "Calculate mortgage for a 2M home",
    "Best areas for families",
    "Market trends 2024",
];

const TOPICS: [(&[&str], &str); 4] = [
    (&["property", "find", "sale", "downtown"], FIND_PROPERTIES),
    (&["mortgage", "calculate", "loan"], MORTGAGE),
    (&["family", "families", "children", "school"], FAMILIES),
    (&["market", "trend", "2024"], MARKET),
];

pub fn reply(message: &str) -> &'static str {
    let lower = message.trim().to_lowercase();
    if lower.is_empty() {
        return WELCOME;
    }

    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK)
}
