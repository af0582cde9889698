// src/domain/property.rs

use super::agent::Agent;
use super::project::Developer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Sale,
    Rent,
}

impl PriceType {
    pub fn as_str(self) -> &'static str {
        match self {
            PriceType::Sale => "sale",
            PriceType::Rent => "rent",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sale" => Some(PriceType::Sale),
            "rent" => Some(PriceType::Rent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentPeriod {
    Yearly,
    Monthly,
    Weekly,
    Daily,
}

impl RentPeriod {
    /// Suffix shown after a rent price ("/ year", "/ monthly", ...).
    pub fn suffix(self) -> &'static str {
        match self {
            RentPeriod::Yearly => "year",
            RentPeriod::Monthly => "monthly",
            RentPeriod::Weekly => "weekly",
            RentPeriod::Daily => "daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    Townhouse,
    Penthouse,
    Studio,
    Duplex,
    Land,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 8] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Townhouse,
        PropertyType::Penthouse,
        PropertyType::Studio,
        PropertyType::Duplex,
        PropertyType::Land,
        PropertyType::Commercial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Studio => "studio",
            PropertyType::Duplex => "duplex",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Studio => "Studio",
            PropertyType::Duplex => "Duplex",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    Ready,
    OffPlan,
    UnderConstruction,
}

impl PropertyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Ready => "ready",
            PropertyStatus::OffPlan => "off-plan",
            PropertyStatus::UnderConstruction => "under-construction",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::Ready => "Ready to Move",
            PropertyStatus::OffPlan => "Off-Plan",
            PropertyStatus::UnderConstruction => "Under Construction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    Sqft,
    Sqm,
}

impl AreaUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            AreaUnit::Sqft => "sqft",
            AreaUnit::Sqm => "sqm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub area: String,
    pub building: Option<String>,
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

/// A listed property with its agent (and developer, for new builds) resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,

    pub price: u64,
    pub price_type: PriceType,
    pub rent_period: Option<RentPeriod>,

    pub property_type: PropertyType,
    pub status: PropertyStatus,
    /// 0 means studio.
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub location: Location,

    pub images: Vec<String>,
    pub features: Vec<String>,
    pub amenities: Vec<String>,

    pub agent: Agent,
    pub developer: Option<Developer>,

    pub verified: bool,
    pub featured: bool,
    pub premium: bool,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn is_studio(&self) -> bool {
        self.bedrooms == 0
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
