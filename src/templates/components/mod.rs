use crate::params::Params;
use maud::{html, Markup};

pub mod cards;
pub mod chat;
pub mod error;
pub mod property_card;
pub mod search_form;

pub use cards::{agent_card, area_card, blog_card, project_card};
pub use chat::{chat_exchange, chat_widget};
pub use error::error_page;
pub use property_card::{property_card, CardVariant};
pub use search_form::{filter_form, hero_search_form};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Zero results is a normal state, not an error.
pub fn empty_state(title: &str, hint: &str) -> Markup {
    html! {
        div class="empty-state" {
            h3 { (title) }
            p { (hint) }
        }
    }
}

/// Swapped into the form's result slot after a successful POST.
pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice success" role="status" { (message) }
    }
}

/// "Load more" link that re-requests `path` with a larger `limit`.
pub fn load_more(path: &str, params: &Params, shown: usize, total: usize, page_size: usize) -> Markup {
    html! {
        @if shown < total {
            div class="load-more" {
                p class="muted" { "Showing " (shown) " of " (total) }
                a class="btn btn-outline" href=(format!("{path}?{}", params.with("limit", &(shown + page_size).to_string()))) {
                    "Load More"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_more_only_when_results_remain() {
        let params = Params::parse("purpose=rent");
        let html = load_more("/search", &params, 12, 20, 12).into_string();
        assert!(html.contains("/search?purpose=rent&amp;limit=24"));
        assert!(html.contains("Showing 12 of 20"));

        assert!(load_more("/search", &params, 20, 20, 12).into_string().is_empty());
    }
}
