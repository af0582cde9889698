use crate::domain::property::PropertyStatus;
use crate::domain::PropertyType;
use crate::query::{BedroomsFilter, PropertyCriteria, PropertySort, Purpose};
use maud::{html, Markup};

const BUY_PRICE_RANGES: [(&str, &str); 4] = [
    ("0-1000000", "Under AED 1M"),
    ("1000000-2000000", "AED 1M - 2M"),
    ("2000000-5000000", "AED 2M - 5M"),
    ("5000000-", "AED 5M+"),
];

/// Hero search on the home page. Submits to `/search`.
pub fn hero_search_form() -> Markup {
    html! {
        form class="hero-search" action="/search" method="get" {
            div class="tabs" {
                label { input type="radio" name="purpose" value="buy" checked; " Buy" }
                label { input type="radio" name="purpose" value="rent"; " Rent" }
            }
            input type="text" name="q" placeholder="Search by property name or community";
            select name="type" {
                option value="" { "Property Type" }
                @for t in PropertyType::ALL {
                    option value=(t.as_str()) { (t.label()) }
                }
            }
            select name="price" {
                option value="" { "Price Range" }
                @for (value, label) in BUY_PRICE_RANGES {
                    option value=(value) { (label) }
                }
            }
            button type="submit" class="btn btn-primary" { "Search" }
        }
    }
}

fn bedrooms_value(b: Option<BedroomsFilter>) -> String {
    match b {
        Some(BedroomsFilter::Studio) => "studio".to_string(),
        Some(BedroomsFilter::AtLeast(n)) => n.to_string(),
        None => String::new(),
    }
}

/// Sidebar filters on `/search`, pre-filled from the current criteria.
pub fn filter_form(c: &PropertyCriteria, view: Option<&str>) -> Markup {
    let purpose = c.purpose.map(Purpose::as_str);
    let bedrooms = bedrooms_value(c.bedrooms);
    let status = c.status.as_deref().unwrap_or("all");

    html! {
        form class="filters" action="/search" method="get" {
            @if let Some(v) = view { input type="hidden" name="view" value=(v); }

            label { "Purpose"
                select name="purpose" {
                    option value="buy" selected[purpose == Some("buy")] { "Buy" }
                    option value="rent" selected[purpose == Some("rent")] { "Rent" }
                }
            }
            label { "Keyword"
                input type="text" name="q" value=[c.query.as_ref().map(|q| q.as_str())];
            }
            label { "Property Type"
                select name="type" {
                    option value="" { "Any" }
                    @for t in PropertyType::ALL {
                        option value=(t.as_str()) selected[c.property_type.as_deref() == Some(t.as_str())] { (t.label()) }
                    }
                }
            }
            label { "Bedrooms"
                select name="bedrooms" {
                    option value="" { "Any" }
                    option value="studio" selected[bedrooms == "studio"] { "Studio" }
                    @for n in 1..=5u32 {
                        option value=(n) selected[bedrooms == n.to_string()] { (n) "+" }
                    }
                }
            }
            label { "Status"
                select name="status" {
                    option value="all" selected[status == "all"] { "All" }
                    @for s in [PropertyStatus::Ready, PropertyStatus::OffPlan, PropertyStatus::UnderConstruction] {
                        option value=(s.as_str()) selected[status == s.as_str()] { (s.label()) }
                    }
                }
            }
            div class="price-inputs" {
                label { "Min Price" input type="number" name="priceMin" min="0" value=[c.price_min]; }
                label { "Max Price" input type="number" name="priceMax" min="0" value=[c.price_max]; }
            }
            label { "Sort"
                select name="sort" {
                    @for s in PropertySort::ALL {
                        option value=(s.as_str()) selected[c.sort == Some(s)] { (s.label()) }
                    }
                }
            }
            button type="submit" class="btn btn-primary" { "Apply Filters" }
            a href="/search" class="btn btn-link" { "Clear" }
        }
    }
}
