use crate::domain::format::count_label;
use crate::domain::Agent;
use crate::query::{AgentCriteria, AgentSort};
use crate::templates::{
    components::{agent_card, empty_state},
    desktop_layout,
};
use maud::{html, Markup};

pub fn agents_page(criteria: &AgentCriteria, agents: &[&Agent]) -> Markup {
    desktop_layout(
        "Find an Agent",
        "/agents",
        html! {
            section class="page-hero" {
                h1 { "Find Your Perfect Agent" }
                p class="lead" { "Connect with top-rated real estate professionals across the UAE." }
            }
            div class="container" {
                form class="filters inline" action="/agents" method="get" {
                    input type="text" name="q" placeholder="Search by name, agency or specialization"
                        value=[criteria.query.as_ref().map(|q| q.as_str())];
                    label {
                        input type="checkbox" name="superAgent" value="1" checked[criteria.super_agents_only];
                        " Super Agents only"
                    }
                    select name="sort" {
                        @for s in AgentSort::ALL {
                            option value=(s.as_str()) selected[criteria.sort == Some(s)] { (s.label()) }
                        }
                    }
                    button type="submit" class="btn btn-primary" { "Search" }
                }

                p class="muted" { (count_label(agents.len(), "agent", "agents")) " found" }

                @if agents.is_empty() {
                    (empty_state("No agents found", "Try a different name or clear the filters."))
                } @else {
                    div class="grid" {
                        @for a in agents { (agent_card(a)) }
                    }
                }
            }
        },
    )
}
