use crate::domain::format::count_label;
use crate::domain::Property;
use crate::params::Params;
use crate::query::{PropertyCriteria, Purpose};
use crate::templates::{
    components::{empty_state, filter_form, load_more, property_card, CardVariant},
    desktop_layout,
};
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub criteria: &'a PropertyCriteria,
    /// Every match; the page shows the first `limit`.
    pub results: &'a [&'a Property],
    pub limit: usize,
    pub page_size: usize,
    pub view: Option<&'a str>,
    pub params: &'a Params,
}

pub fn search_page(vm: &SearchVm) -> Markup {
    let heading = match vm.criteria.purpose {
        Some(Purpose::Rent) => "Properties for Rent",
        _ => "Properties for Sale",
    };
    let variant = CardVariant::from_view(vm.view);
    let shown = vm.results.len().min(vm.limit);

    desktop_layout(
        heading,
        "/search",
        html! {
            div class="container search-layout" {
                aside { (filter_form(vm.criteria, vm.view)) }

                section {
                    div class="results-header" {
                        h1 { (heading) }
                        p class="muted" { (count_label(vm.results.len(), "property", "properties")) " found" }
                        div class="view-toggle" {
                            a href=(format!("/search?{}", vm.params.with("view", "grid"))) { "Grid" }
                            a href=(format!("/search?{}", vm.params.with("view", "list"))) { "List" }
                        }
                    }

                    @if vm.results.is_empty() {
                        (empty_state(
                            "No properties found",
                            "Try adjusting your filters or search for a different area.",
                        ))
                    } @else {
                        div class=(if variant == CardVariant::Horizontal { "list" } else { "grid" }) {
                            @for p in vm.results.iter().take(shown) {
                                (property_card(p, variant))
                            }
                        }
                        (load_more("/search", vm.params, shown, vm.results.len(), vm.page_size))
                    }
                }
            }
        },
    )
}
