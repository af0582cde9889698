// src/domain/content.rs
//
// Records that need no reference resolution and deserialize straight from fixtures.

use super::property::PriceType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogAuthor {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: BlogAuthor,
    /// Minutes.
    pub read_time: u32,
    pub published_at: NaiveDate,
    pub featured: bool,
}

/// A neighbourhood guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub city: String,
    pub description: String,
    pub image: String,
    pub properties_for_sale: u32,
    pub properties_for_rent: u32,
    pub average_sale_price: u64,
    pub average_rent_price: u64,
    pub highlights: Vec<String>,
    pub nearby_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub property_type: String,
    pub transaction_type: PriceType,
    pub price: u64,
    pub area: String,
    /// Square feet.
    pub size: f64,
    pub date: NaiveDate,
}

/// An open position on the careers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub remote: bool,
}
