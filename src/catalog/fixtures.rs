// src/catalog/fixtures.rs
//
// Raw fixture shapes. Cross-record references are ids here and get
// resolved into embedded records before anything else sees them.

use crate::domain::agent::{Agency, Agent, SocialLinks};
use crate::domain::project::{Developer, Project, ProjectLocation, ProjectStatus, UnitSizes};
use crate::domain::property::{
    AreaUnit, Location, PriceType, Property, PropertyStatus, PropertyType, RentPeriod,
};
use crate::errors::ServerError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;

pub type Index<'a, T> = HashMap<&'a str, &'a T>;

pub fn index_by_id<'a, T, F>(items: &'a [T], id: F) -> Index<'a, T>
where
    F: Fn(&'a T) -> &'a str,
{
    items.iter().map(|item| (id(item), item)).collect()
}

fn lookup<T: Clone>(
    index: &Index<'_, T>,
    id: &str,
    kind: &str,
    owner: &str,
) -> Result<T, ServerError> {
    index
        .get(id)
        .map(|found| (*found).clone())
        .ok_or_else(|| ServerError::FixtureError(format!("{owner} references unknown {kind} '{id}'")))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFixture {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub avatar: String,
    pub agency_id: Option<String>,
    pub bio: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
    pub properties_count: u32,
    pub rating: f32,
    pub reviews_count: u32,
    pub verified: bool,
    pub super_agent: bool,
    pub experience: u32,
    pub response_time: String,
    pub sold_properties: u32,
    pub active_listings: u32,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl AgentFixture {
    pub fn resolve(self, agencies: &Index<'_, Agency>) -> Result<Agent, ServerError> {
        let agency = match &self.agency_id {
            Some(id) => Some(lookup(agencies, id, "agency", &format!("agent '{}'", self.id))?),
            None => None,
        };

        Ok(Agent {
            id: self.id,
            name: self.name,
            slug: self.slug,
            email: self.email,
            phone: self.phone,
            whatsapp: self.whatsapp,
            avatar: self.avatar,
            agency,
            bio: self.bio,
            languages: self.languages,
            specializations: self.specializations,
            properties_count: self.properties_count,
            rating: self.rating,
            reviews_count: self.reviews_count,
            verified: self.verified,
            super_agent: self.super_agent,
            experience: self.experience,
            response_time: self.response_time,
            sold_properties: self.sold_properties,
            active_listings: self.active_listings,
            social_links: self.social_links,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFixture {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: u64,
    pub price_type: PriceType,
    pub rent_period: Option<RentPeriod>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub location: Location,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub agent_id: String,
    pub developer_id: Option<String>,
    pub verified: bool,
    pub featured: bool,
    pub premium: bool,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropertyFixture {
    pub fn resolve(
        self,
        agents: &Index<'_, Agent>,
        developers: &Index<'_, Developer>,
    ) -> Result<Property, ServerError> {
        let owner = format!("property '{}'", self.id);
        let agent = lookup(agents, &self.agent_id, "agent", &owner)?;
        let developer = match &self.developer_id {
            Some(id) => Some(lookup(developers, id, "developer", &owner)?),
            None => None,
        };

        if self.price_type == PriceType::Sale && self.rent_period.is_some() {
            return Err(ServerError::FixtureError(format!(
                "{owner} is for sale but carries a rent period"
            )));
        }

        Ok(Property {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            price: self.price,
            price_type: self.price_type,
            rent_period: self.rent_period,
            property_type: self.property_type,
            status: self.status,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            area_unit: self.area_unit,
            location: self.location,
            images: self.images,
            features: self.features,
            amenities: self.amenities,
            agent,
            developer,
            verified: self.verified,
            featured: self.featured,
            premium: self.premium,
            view_count: self.view_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFixture {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub developer_id: String,
    pub location: ProjectLocation,
    pub price_from: u64,
    pub price_to: u64,
    pub completion_date: NaiveDate,
    pub status: ProjectStatus,
    pub property_types: Vec<String>,
    pub unit_sizes: UnitSizes,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub payment_plan: Option<String>,
    pub featured: bool,
}

impl ProjectFixture {
    pub fn resolve(self, developers: &Index<'_, Developer>) -> Result<Project, ServerError> {
        let developer = lookup(
            developers,
            &self.developer_id,
            "developer",
            &format!("project '{}'", self.id),
        )?;

        Ok(Project {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            developer,
            location: self.location,
            price_from: self.price_from,
            price_to: self.price_to,
            completion_date: self.completion_date,
            status: self.status,
            property_types: self.property_types,
            unit_sizes: self.unit_sizes,
            images: self.images,
            amenities: self.amenities,
            payment_plan: self.payment_plan,
            featured: self.featured,
        })
    }
}
