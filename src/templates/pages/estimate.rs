use crate::domain::format::{format_price, format_price_range};
use crate::domain::PropertyType;
use crate::services::{Estimate, EstimateInput};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn estimate_page() -> Markup {
    desktop_layout(
        "AtogEstimate\u{2122}",
        "/estimate",
        html! {
            section class="page-hero" {
                h1 { "What's Your Property Worth?" }
                p class="lead" { "Get an instant valuation based on recent transactions in your area." }
            }
            div class="container narrow" {
                form class="card" method="post" action="/estimate" hx-post="/estimate" hx-target="#estimate-result" hx-swap="innerHTML" {
                    h2 { "Property Details" }
                    input type="text" name="location" placeholder="Enter address, area, or building name" required;
                    select name="propertyType" {
                        @for t in PropertyType::ALL {
                            option value=(t.as_str()) { (t.label()) }
                        }
                    }
                    input type="number" name="bedrooms" min="0" placeholder="Bedrooms";
                    input type="number" name="bathrooms" min="0" placeholder="Bathrooms";
                    input type="number" name="area" min="1" placeholder="Enter property size";
                    div class="tabs" {
                        label { input type="radio" name="purpose" value="sale" checked; " Selling" }
                        label { input type="radio" name="purpose" value="rent"; " Renting out" }
                    }
                    button type="submit" class="btn btn-primary" { "Get Estimate" }
                }
                div id="estimate-result" {}
            }
        },
    )
}

/// Result fragment returned by `POST /estimate`.
pub fn estimate_result(input: &EstimateInput, est: &Estimate) -> Markup {
    html! {
        section class="card estimate-result" {
            h2 { "Your AtogEstimate\u{2122}" }
            @if let Some(loc) = &input.location { p class="muted" { (loc) } }
            p class="price" { (format_price(est.value)) }
            p { "Estimated range: " (format_price_range(est.low, est.high)) }
            p { "Price per sqft: AED " (est.per_sqft) }
            p class="muted" { "This estimate is indicative only and is not a formal valuation." }
            a href="/sell" class="btn btn-outline" { "Talk to an agent" }
        }
    }
}
