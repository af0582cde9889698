// templates/pages/listings.rs
//
// Areas, blog and projects: a search box, an optional selector, a grid.

use crate::domain::format::count_label;
use crate::domain::project::ProjectStatus;
use crate::domain::{Area, Blog, Project};
use crate::query::{AreaCriteria, BlogCriteria, ProjectCriteria, ALL_LABEL};
use crate::templates::{
    components::{area_card, blog_card, empty_state, project_card},
    desktop_layout,
};
use maud::{html, Markup};

pub fn areas_page(criteria: &AreaCriteria, areas: &[&Area]) -> Markup {
    desktop_layout(
        "Area Guides",
        "/areas",
        html! {
            section class="page-hero" {
                h1 { "Explore UAE Communities" }
                p class="lead" { "Prices, lifestyle and highlights for the most sought-after neighbourhoods." }
            }
            div class="container" {
                form class="filters inline" action="/areas" method="get" {
                    input type="text" name="q" placeholder="Search areas or cities"
                        value=[criteria.query.as_ref().map(|q| q.as_str())];
                    button type="submit" class="btn btn-primary" { "Search" }
                }
                @if areas.is_empty() {
                    (empty_state("No areas found", "Try searching for a different community or city."))
                } @else {
                    div class="grid" { @for a in areas { (area_card(a)) } }
                }
            }
        },
    )
}

pub fn blog_page(
    criteria: &BlogCriteria,
    featured: Option<&Blog>,
    posts: &[&Blog],
    categories: &[&str],
) -> Markup {
    let active = criteria.category.as_deref().unwrap_or(ALL_LABEL);

    desktop_layout(
        "Blog",
        "/blog",
        html! {
            section class="page-hero" {
                h1 { "Real Estate Insights" }
                p class="lead" { "Market reports, buying guides and investment tips from our experts." }
            }
            div class="container" {
                form class="filters inline" action="/blog" method="get" {
                    input type="text" name="q" placeholder="Search articles"
                        value=[criteria.query.as_ref().map(|q| q.as_str())];
                    @if let Some(c) = &criteria.category { input type="hidden" name="category" value=(c); }
                    button type="submit" class="btn btn-primary" { "Search" }
                }
                nav class="pills" {
                    @for c in categories {
                        a href=(format!("/blog?category={}", c.replace(' ', "+")))
                            class=[(*c == active).then_some("active")] { (c) }
                    }
                }

                @if let Some(b) = featured {
                    section class="featured-post" {
                        span class="tag tag-accent" { "Featured" }
                        (blog_card(b))
                    }
                }

                @if posts.is_empty() {
                    (empty_state("No articles found", "Try another category or keyword."))
                } @else {
                    div class="grid" { @for b in posts { (blog_card(b)) } }
                }
            }
        },
    )
}

pub fn projects_page(criteria: &ProjectCriteria, projects: &[&Project]) -> Markup {
    let status = criteria.status.as_deref().unwrap_or("all");

    desktop_layout(
        "New Projects",
        "/projects",
        html! {
            section class="page-hero" {
                h1 { "New Projects" }
                p class="lead" { "Off-plan and newly completed developments from the UAE's leading developers." }
            }
            div class="container" {
                form class="filters inline" action="/projects" method="get" {
                    input type="text" name="q" placeholder="Search projects, developers or areas"
                        value=[criteria.query.as_ref().map(|q| q.as_str())];
                    select name="status" {
                        option value="all" selected[status == "all"] { "All Status" }
                        @for s in [ProjectStatus::Upcoming, ProjectStatus::UnderConstruction, ProjectStatus::Ready] {
                            option value=(s.as_str()) selected[status == s.as_str()] { (s.label()) }
                        }
                    }
                    button type="submit" class="btn btn-primary" { "Search" }
                }
                p class="muted" { (count_label(projects.len(), "project", "projects")) }
                @if projects.is_empty() {
                    (empty_state("No projects found", "Try a different developer, area or status."))
                } @else {
                    div class="grid" { @for p in projects { (project_card(p)) } }
                }
            }
        },
    )
}
