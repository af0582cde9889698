// src/query/property.rs

use super::engine::{text_matches, Criteria, TextQuery};
use crate::domain::{PriceType, Property};
use crate::params::Params;
use std::cmp::Ordering;

/// What the visitor wants to do: buy maps to sale listings, rent to rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Buy,
    Rent,
}

impl Purpose {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "buy" => Some(Purpose::Buy),
            "rent" => Some(Purpose::Rent),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Buy => "buy",
            Purpose::Rent => "rent",
        }
    }

    pub fn price_type(self) -> PriceType {
        match self {
            Purpose::Buy => PriceType::Sale,
            Purpose::Rent => PriceType::Rent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedroomsFilter {
    /// Exactly zero bedrooms.
    Studio,
    /// Minimum-inclusive.
    AtLeast(u32),
}

impl BedroomsFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "studio" {
            return Some(BedroomsFilter::Studio);
        }
        raw.parse().ok().map(BedroomsFilter::AtLeast)
    }

    pub fn matches(self, bedrooms: u32) -> bool {
        match self {
            BedroomsFilter::Studio => bedrooms == 0,
            BedroomsFilter::AtLeast(n) => bedrooms >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySort {
    Newest,
    PriceLow,
    PriceHigh,
    Popular,
}

impl PropertySort {
    pub const ALL: [PropertySort; 4] = [
        PropertySort::Newest,
        PropertySort::PriceLow,
        PropertySort::PriceHigh,
        PropertySort::Popular,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "newest" => Some(PropertySort::Newest),
            "price-low" => Some(PropertySort::PriceLow),
            "price-high" => Some(PropertySort::PriceHigh),
            "popular" => Some(PropertySort::Popular),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertySort::Newest => "newest",
            PropertySort::PriceLow => "price-low",
            PropertySort::PriceHigh => "price-high",
            PropertySort::Popular => "popular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertySort::Newest => "Newest First",
            PropertySort::PriceLow => "Price: Low to High",
            PropertySort::PriceHigh => "Price: High to Low",
            PropertySort::Popular => "Most Popular",
        }
    }
}

/// Search page filters. Every `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyCriteria {
    pub purpose: Option<Purpose>,
    /// Exact match against the type tag, e.g. "villa".
    pub property_type: Option<String>,
    pub bedrooms: Option<BedroomsFilter>,
    /// Exact match against the status tag; "all" is normalized to `None`.
    pub status: Option<String>,
    /// Inclusive bounds. Decimal and exponent forms are accepted.
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub query: Option<TextQuery>,
    pub sort: Option<PropertySort>,
}

impl PropertyCriteria {
    /// Normalize request parameters. Anything that does not parse is dropped.
    pub fn from_params(params: &Params) -> Self {
        let (range_min, range_max) = params
            .get("price")
            .map(parse_price_range)
            .unwrap_or((None, None));

        Self {
            purpose: params.get("purpose").and_then(Purpose::parse),
            property_type: params.get("type").map(str::to_string),
            bedrooms: params.get("bedrooms").and_then(BedroomsFilter::parse),
            status: params
                .get("status")
                .filter(|s| *s != "all")
                .map(str::to_string),
            price_min: params.get("priceMin").and_then(parse_bound).or(range_min),
            price_max: params.get("priceMax").and_then(parse_bound).or(range_max),
            query: params.get("q").and_then(TextQuery::new),
            sort: params.get("sort").and_then(PropertySort::parse),
        }
    }

}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// "1000000-2000000", "5000000-" or "-80000" from the hero search form.
fn parse_price_range(raw: &str) -> (Option<f64>, Option<f64>) {
    match raw.split_once('-') {
        Some((lo, hi)) => (parse_bound(lo), parse_bound(hi)),
        None => (None, None),
    }
}

impl Criteria<Property> for PropertyCriteria {
    fn matches(&self, p: &Property) -> bool {
        if let Some(purpose) = self.purpose {
            if p.price_type != purpose.price_type() {
                return false;
            }
        }
        if let Some(t) = &self.property_type {
            if p.property_type.as_str() != t {
                return false;
            }
        }
        if let Some(b) = self.bedrooms {
            if !b.matches(p.bedrooms) {
                return false;
            }
        }
        if let Some(s) = &self.status {
            if p.status.as_str() != s {
                return false;
            }
        }
        if self.price_min.is_some_and(|min| (p.price as f64) < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| (p.price as f64) > max) {
            return false;
        }
        text_matches(&self.query, &p.title)
    }

    fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self.sort {
            Some(PropertySort::Newest) => b.created_at.cmp(&a.created_at),
            Some(PropertySort::PriceLow) => a.price.cmp(&b.price),
            Some(PropertySort::PriceHigh) => b.price.cmp(&a.price),
            Some(PropertySort::Popular) => b.view_count.cmp(&a.view_count),
            None => Ordering::Equal,
        }
    }
}
