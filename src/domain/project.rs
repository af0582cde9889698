use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo: String,
    pub description: String,
    pub projects_count: u32,
    pub completed_projects: u32,
    pub established: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Upcoming,
    UnderConstruction,
    Ready,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "upcoming",
            ProjectStatus::UnderConstruction => "under-construction",
            ProjectStatus::Ready => "ready",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "Upcoming",
            ProjectStatus::UnderConstruction => "Under Construction",
            ProjectStatus::Ready => "Ready",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLocation {
    pub city: String,
    pub area: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSizes {
    pub min: f64,
    pub max: f64,
}

/// An off-plan or recently completed development.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub developer: Developer,
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
