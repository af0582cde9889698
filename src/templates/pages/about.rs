use crate::catalog::Catalog;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

const VALUES: [(&str, &str); 4] = [
    ("Trust & Transparency", "Verified listings and honest pricing on every property."),
    ("Customer First", "Every decision starts with what our clients need."),
    ("Innovation", "Tools like AtogEstimate\u{2122} make property decisions simpler."),
    ("Global Reach", "Buyers and investors from over 100 countries trust Atog."),
];

const LEADERSHIP: [(&str, &str); 4] = [
    ("Ahmed Al Maktoum", "Chief Executive Officer"),
    ("Sarah Johnson", "Chief Operating Officer"),
    ("Michael Chen", "Chief Technology Officer"),
    ("Fatima Ali", "Head of Sales"),
];

pub fn about_page(catalog: &Catalog) -> Markup {
    desktop_layout(
        "About Us",
        "/about",
        html! {
            section class="page-hero" {
                h1 { "About Atog" }
                p class="lead" { "We help people find, buy, sell and rent property across the UAE." }
            }
            div class="container" {
                div class="stats-row" {
                    div class="stat" { strong { (catalog.properties.len()) } p class="muted" { "Active listings" } }
                    div class="stat" { strong { (catalog.agents.len()) } p class="muted" { "Expert agents" } }
                    div class="stat" { strong { (catalog.agencies.len()) } p class="muted" { "Partner agencies" } }
                    div class="stat" { strong { (catalog.developers.len()) } p class="muted" { "Developers" } }
                }

                h2 { "Our Values" }
                div class="grid" {
                    @for (title, text) in VALUES {
                        (card(title, html! { p { (text) } }))
                    }
                }

                h2 { "Leadership" }
                div class="grid" {
                    @for (name, role) in LEADERSHIP {
                        div class="person" { h3 { (name) } p class="muted" { (role) } }
                    }
                }

                section class="cta" {
                    h2 { "Ready to find your next home?" }
                    a href="/search" class="btn btn-primary" { "Browse Properties" }
                    a href="/contact" class="btn btn-outline" { "Contact Us" }
                }
            }
        },
    )
}
