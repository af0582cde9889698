use crate::domain::format::{
    email_link, format_area, format_listing_price, format_price, format_relative_date, phone_link,
    whatsapp_link,
};
use crate::domain::{PriceType, Property};
use crate::services::default_plan;
use crate::templates::{
    components::{property_card, CardVariant},
    desktop_layout,
};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

fn mortgage_summary(p: &Property) -> Markup {
    let (down, plan) = default_plan(p.price);
    html! {
        section class="card mortgage" {
            h3 { "Mortgage Calculator" }
            p { "Down payment (20%): " strong { (format_price(down)) } }
            p { "Monthly payment (25 years @ 4.5%): " strong { (format_price(plan.monthly_payment)) } }
            p class="muted" { "Total interest: " (format_price(plan.total_interest)) }
        }
    }
}

pub fn property_page(p: &Property, similar: &[&Property], now: DateTime<Utc>) -> Markup {
    let enquiry = format!("Hi, I'm interested in {} (ref {}).", p.title, p.id);

    desktop_layout(
        &p.title,
        "/search",
        html! {
            article class="container property-detail" {
                nav class="breadcrumbs" {
                    a href="/" { "Home" } " / "
                    a href=(format!("/search?purpose={}", if p.price_type == PriceType::Rent { "rent" } else { "buy" })) {
                        @if p.price_type == PriceType::Rent { "Rent" } @else { "Buy" }
                    }
                    " / " (p.location.area)
                }

                div class="gallery" {
                    @for img in &p.images {
                        img src=(img) alt=(p.title) loading="lazy";
                    }
                }

                header {
                    p class="price" { (format_listing_price(p)) }
                    h1 { (p.title) }
                    p class="muted" {
                        @if let Some(b) = &p.location.building { (b) ", " }
                        (p.location.address)
                    }
                    div class="badges" {
                        span class="tag tag-primary" { (p.property_type.label()) }
                        span class="tag" { (p.status.label()) }
                        @if p.verified { span class="tag tag-success" { "Verified" } }
                    }
                    p class="muted" {
                        "Listed " (format_relative_date(p.created_at, now).to_lowercase())
                        " \u{b7} " (p.view_count) " views"
                    }
                }

                div class="facts" {
                    span { @if p.is_studio() { "Studio" } @else { (p.bedrooms) " Bedrooms" } }
                    span { (p.bathrooms) " Bathrooms" }
                    span { (format_area(p.area, p.area_unit)) }
                }

                section {
                    h2 { "Description" }
                    p { (p.description) }
                }

                @if !p.features.is_empty() {
                    section {
                        h2 { "Features" }
                        ul class="tags" { @for f in &p.features { li { (f) } } }
                    }
                }

                @if !p.amenities.is_empty() {
                    section {
                        h2 { "Amenities" }
                        ul class="tags" { @for a in &p.amenities { li { (a) } } }
                    }
                }

                @if let Some(dev) = &p.developer {
                    section class="card" {
                        h3 { "Developer" }
                        p { strong { (dev.name) } " \u{b7} est. " (dev.established) }
                        p class="muted" { (dev.completed_projects) " completed projects" }
                    }
                }

                aside class="card agent-contact" {
                    h3 { (p.agent.name) }
                    @if let Some(agency) = p.agent.agency_name() { p class="muted" { (agency) } }
                    p { (format!("{:.1}", p.agent.rating)) " \u{2605} \u{b7} responds " (p.agent.response_time.to_lowercase()) }
                    a href=(phone_link(&p.agent.phone)) class="btn btn-outline" { "Call" }
                    a href=(email_link(&p.agent.email, &format!("Enquiry: {}", p.title), &enquiry)) class="btn btn-outline" { "Email" }
                    @if let Some(wa) = &p.agent.whatsapp {
                        a href=(whatsapp_link(wa, &enquiry)) class="btn btn-primary" { "WhatsApp" }
                    }
                }

                @if p.price_type == PriceType::Sale { (mortgage_summary(p)) }

                @if !similar.is_empty() {
                    section {
                        h2 { "Similar Properties" }
                        div class="grid" {
                            @for s in similar { (property_card(s, CardVariant::Compact)) }
                        }
                    }
                }
            }
        },
    )
}
