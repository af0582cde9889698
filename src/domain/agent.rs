use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo: String,
    pub cover_image: Option<String>,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub agents_count: u32,
    pub properties_count: u32,
    pub rating: f32,
    pub reviews_count: u32,
    pub verified: bool,
    pub premium: bool,
    pub established: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub avatar: String,
    pub agency: Option<Agency>,
    pub bio: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
    pub properties_count: u32,
    pub rating: f32,
    pub reviews_count: u32,
    pub verified: bool,
    pub super_agent: bool,
    /// Years in the business.
    pub experience: u32,
    pub response_time: String,
    pub sold_properties: u32,
    pub active_listings: u32,
    pub social_links: SocialLinks,
}

impl Agent {
    pub fn agency_name(&self) -> Option<&str> {
        self.agency.as_ref().map(|a| a.name.as_str())
    }

    /// Two-letter initials used when the avatar fails to load.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let agent = crate::tests::utils::agent("a1", "sarah mitchell jones");
        assert_eq!(agent.initials(), "SM");
    }
}
