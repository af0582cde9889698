use crate::domain::Job;
use crate::query::{JobCriteria, ALL_LABEL};
use crate::templates::{
    components::{card, empty_state},
    desktop_layout,
};
use maud::{html, Markup};

const BENEFITS: [(&str, &str); 6] = [
    ("Competitive Salary", "Market-leading pay with performance bonuses."),
    ("Health Benefits", "Comprehensive medical cover for you and your family."),
    ("Great Team", "Work with passionate people who love what they do."),
    ("Growth", "Clear career paths and a learning budget."),
    ("Flexible Work", "Hybrid and remote options for many roles."),
    ("Modern Office", "A bright workspace in the heart of Dubai."),
];

pub fn careers_page(criteria: &JobCriteria, jobs: &[&Job], departments: &[&str]) -> Markup {
    let active = criteria.department.as_deref().unwrap_or(ALL_LABEL);

    desktop_layout(
        "Careers",
        "/careers",
        html! {
            section class="page-hero" {
                h1 { "Build the Future of Real Estate" }
                p class="lead" { "Join a team that is changing how people find their homes." }
            }
            div class="container" {
                h2 { "Why Work With Us" }
                div class="grid" {
                    @for (title, text) in BENEFITS {
                        (card(title, html! { p { (text) } }))
                    }
                }

                h2 { "Open Positions" }
                form class="filters inline" action="/careers" method="get" {
                    input type="text" name="q" placeholder="Search positions..."
                        value=[criteria.query.as_ref().map(|q| q.as_str())];
                    select name="department" {
                        @for d in departments {
                            option value=(d) selected[*d == active] { (d) }
                        }
                    }
                    button type="submit" class="btn btn-primary" { "Search" }
                }

                @if jobs.is_empty() {
                    (empty_state("No positions found", "Check back soon or send us an open application."))
                } @else {
                    ul class="job-list" {
                        @for j in jobs {
                            li class="job" {
                                h3 { (j.title) }
                                p class="muted" {
                                    (j.department) " \u{b7} " (j.location) " \u{b7} " (j.employment_type)
                                    @if j.remote { " \u{b7} Remote" }
                                }
                            }
                        }
                    }
                }

                section class="card" id="apply" {
                    h2 { "Apply Now" }
                    form hx-post="/careers/apply" hx-target="#apply-result" hx-swap="innerHTML" method="post" action="/careers/apply" {
                        input type="text" name="name" placeholder="Full name" required;
                        input type="email" name="email" placeholder="Email address" required;
                        select name="position" required {
                            @for j in jobs { option value=(j.title) { (j.title) } }
                        }
                        textarea name="message" placeholder="Tell us about yourself" {}
                        button type="submit" class="btn btn-primary" { "Submit Application" }
                    }
                    div id="apply-result" {}
                }
            }
        },
    )
}
