// src/services/estimate.rs
//
// Instant valuation. Not a real model: a simple size/bedroom formula
// jittered by up to +/-10%.

use crate::params::Params;
use rand::Rng;

const PER_BEDROOM: f64 = 800_000.0;
const PER_SQFT: f64 = 1_200.0;
const DEFAULT_BEDROOMS: u32 = 1;
const DEFAULT_AREA_SQFT: f64 = 1_000.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateInput {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area_sqft: Option<f64>,
    pub purpose: Option<String>,
}

impl EstimateInput {
    pub fn from_params(params: &Params) -> Self {
        Self {
            location: params.get("location").map(str::to_string),
            property_type: params.get("propertyType").map(str::to_string),
            bedrooms: params.parse_as("bedrooms"),
            bathrooms: params.parse_as("bathrooms"),
            area_sqft: params
                .parse_as::<f64>("area")
                .filter(|a| a.is_finite() && *a > 0.0),
            purpose: params.get("purpose").map(str::to_string),
        }
    }

    fn bedrooms_or_default(&self) -> u32 {
        self.bedrooms.unwrap_or(DEFAULT_BEDROOMS)
    }

    fn area_or_default(&self) -> f64 {
        self.area_sqft.unwrap_or(DEFAULT_AREA_SQFT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub value: u64,
    pub low: u64,
    pub high: u64,
    pub per_sqft: u64,
}

pub fn base_price(input: &EstimateInput) -> f64 {
    input.bedrooms_or_default() as f64 * PER_BEDROOM + input.area_or_default() * PER_SQFT
}

pub fn estimate<R: Rng + ?Sized>(input: &EstimateInput, rng: &mut R) -> Estimate {
    let factor: f64 = rng.gen_range(0.9..1.1);
    let value = (base_price(input) * factor).round();

    Estimate {
        value: value as u64,
        low: (value * 0.9).round() as u64,
        high: (value * 1.1).round() as u64,
        per_sqft: (value / input.area_or_default()).round() as u64,
    }
}
