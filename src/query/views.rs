// src/query/views.rs
//
// Fixed derived views used by the home, detail and transactions pages.

use crate::domain::{PriceType, Property, Transaction};

pub fn featured<T, F>(records: &[T], is_featured: F) -> Vec<&T>
where
    F: Fn(&T) -> bool,
{
    records.iter().filter(|r| is_featured(r)).collect()
}

/// Other listings in the same location area, in fixture order.
pub fn similar_properties<'a>(
    all: &'a [Property],
    property: &Property,
    limit: usize,
) -> Vec<&'a Property> {
    all.iter()
        .filter(|p| p.id != property.id && p.location.area == property.location.area)
        .take(limit)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionStats {
    pub total_volume: u64,
    /// Mean price of the filtered rows; 0 when nothing matched.
    pub average_price: u64,
    pub sales_count: usize,
    pub rent_count: usize,
}

impl TransactionStats {
    /// Volume and average cover the filtered rows; the sale/rent counts
    /// always describe the whole collection.
    pub fn compute(filtered: &[&Transaction], all: &[Transaction]) -> Self {
        let total_volume: u64 = filtered.iter().map(|t| t.price).sum();
        let average_price = match filtered.len() {
            0 => 0,
            n => (total_volume as f64 / n as f64).round() as u64,
        };
        let count = |kind| all.iter().filter(|t| t.transaction_type == kind).count();

        Self {
            total_volume,
            average_price,
            sales_count: count(PriceType::Sale),
            rent_count: count(PriceType::Rent),
        }
    }
}
