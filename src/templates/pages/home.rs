// templates/pages/home.rs

use crate::catalog::Catalog;
use crate::query::featured;
use crate::templates::{
    components::{agent_card, area_card, blog_card, hero_search_form, project_card, property_card, CardVariant},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(catalog: &Catalog) -> Markup {
    let properties = featured(&catalog.properties, |p| p.featured);
    let projects = featured(&catalog.projects, |p| p.featured);
    let super_agents = featured(&catalog.agents, |a| a.super_agent);

    desktop_layout(
        "Find Your Dream Property in UAE",
        "/",
        html! {
            section class="hero" {
                h1 { "Find Your Dream Property in UAE" }
                p class="lead" { "Discover thousands of properties for sale and rent across Dubai, Abu Dhabi and beyond." }
                (hero_search_form())
                div class="hero-stats" {
                    span { strong { (catalog.properties.len()) } " Properties" }
                    span { strong { (catalog.agents.len()) } " Expert Agents" }
                    span { strong { (catalog.areas.len()) } " Communities" }
                }
            }

            section class="container" {
                h2 { "Featured Properties" }
                div class="grid" {
                    @for p in properties.iter().take(6) {
                        (property_card(p, CardVariant::Default))
                    }
                }
                a href="/search" class="btn btn-outline" { "View All Properties" }
            }

            section class="container" {
                h2 { "Explore Popular Areas" }
                div class="grid" {
                    @for a in catalog.areas.iter().take(4) { (area_card(a)) }
                }
                a href="/areas" class="btn btn-link" { "All Area Guides" }
            }

            section class="container" {
                h2 { "New Projects" }
                div class="grid" {
                    @for p in projects.iter().take(3) { (project_card(p)) }
                }
            }

            section class="container cta-row" {
                div class="card" {
                    h3 { "Sell Your Property" }
                    p { "List with Atog and reach thousands of verified buyers." }
                    a href="/sell" class="btn btn-primary" { "Get Started" }
                }
                div class="card" {
                    h3 { "What's My Home Worth?" }
                    p { "Get an instant AtogEstimate\u{2122} in under a minute." }
                    a href="/estimate" class="btn btn-primary" { "Get Estimate" }
                }
            }

            section class="container" {
                h2 { "Top Agents" }
                div class="grid" {
                    @for a in super_agents.iter().take(4) { (agent_card(a)) }
                }
            }

            section class="container" {
                h2 { "Latest Insights" }
                div class="grid" {
                    @for b in catalog.blogs.iter().take(3) { (blog_card(b)) }
                }
            }
        },
    )
}
