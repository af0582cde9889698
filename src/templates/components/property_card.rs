use crate::domain::format::{format_area, format_listing_price};
use crate::domain::property::PropertyStatus;
use crate::domain::Property;
use maud::{html, Markup};

/// How a listing is drawn: the grid tile, a small tile for sidebars, or a
/// wide row for list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Compact,
    Horizontal,
}

impl CardVariant {
    /// `view=list` on the search page.
    pub fn from_view(view: Option<&str>) -> Self {
        match view {
            Some("list") => CardVariant::Horizontal,
            _ => CardVariant::Default,
        }
    }
}

pub fn bedrooms_label(p: &Property) -> String {
    if p.is_studio() {
        "Studio".to_string()
    } else {
        format!("{} Beds", p.bedrooms)
    }
}

fn cover(p: &Property) -> Markup {
    html! {
        img src=(p.cover_image().unwrap_or("/static/placeholder-property.jpg")) alt=(p.title) loading="lazy";
    }
}

fn badges(p: &Property) -> Markup {
    html! {
        div class="badges" {
            @if p.premium { span class="tag tag-secondary" { "Premium" } }
            @if p.featured { span class="tag tag-accent" { "Featured" } }
            @if p.status == PropertyStatus::OffPlan { span class="tag tag-primary" { "Off-Plan" } }
        }
    }
}

fn facts(p: &Property) -> Markup {
    html! {
        div class="facts" {
            span { (bedrooms_label(p)) }
            span { (p.bathrooms) " Baths" }
            span { (format_area(p.area, p.area_unit)) }
        }
    }
}

pub fn property_card(p: &Property, variant: CardVariant) -> Markup {
    let href = format!("/property/{}", p.slug);

    match variant {
        CardVariant::Compact => html! {
            a class="property-card compact" href=(href) {
                (cover(p))
                div class="body" {
                    p class="price" { (format_listing_price(p)) }
                    h3 { (p.title) }
                    p class="muted" { (p.location.area) }
                }
            }
        },
        CardVariant::Horizontal => html! {
            article class="property-card horizontal" {
                a href=(href) class="media" { (cover(p)) (badges(p)) }
                div class="body" {
                    div class="row" {
                        p class="price" { (format_listing_price(p)) }
                        span class="tag tag-primary" { (p.property_type.label()) }
                    }
                    @if p.verified { span class="verified" { "Verified" } }
                    a href=(href) { h3 { (p.title) } }
                    p class="muted" { (p.location.area) ", " (p.location.city) }
                    (facts(p))
                    div class="agent-row" {
                        span { (p.agent.name) }
                        @if p.agent.super_agent { span class="super-agent" { "Super Agent" } }
                    }
                }
            }
        },
        CardVariant::Default => html! {
            article class="property-card" {
                a href=(href) class="media" { (cover(p)) (badges(p)) }
                div class="body" {
                    p class="price" { (format_listing_price(p)) }
                    a href=(href) { h3 { (p.title) } }
                    p class="muted" { (p.location.area) ", " (p.location.city) }
                    (facts(p))
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::property;

    #[test]
    fn list_view_selects_horizontal() {
        assert_eq!(CardVariant::from_view(Some("list")), CardVariant::Horizontal);
        assert_eq!(CardVariant::from_view(Some("grid")), CardVariant::Default);
        assert_eq!(CardVariant::from_view(None), CardVariant::Default);
    }

    #[test]
    fn studio_and_rent_labels() {
        let p = property("p1").bedrooms(0).rent().price(85_000).build();
        let html = property_card(&p, CardVariant::Default).into_string();
        assert!(html.contains("Studio"));
        assert!(html.contains("AED 85K / year"));
        assert!(html.contains("/property/listing-p1"));
    }

    #[test]
    fn horizontal_shows_agent() {
        let p = property("p2").featured().build();
        let html = property_card(&p, CardVariant::Horizontal).into_string();
        assert!(html.contains("Test Agent"));
        assert!(html.contains("Featured"));
    }
}
