use crate::domain::format::{format_date, format_price, group_thousands};
use crate::domain::{PriceType, Transaction};
use crate::params::Params;
use crate::query::{TransactionCriteria, TransactionStats};
use crate::templates::{components::empty_state, desktop_layout};
use maud::{html, Markup};

pub fn transactions_page(
    criteria: &TransactionCriteria,
    rows: &[&Transaction],
    stats: &TransactionStats,
    params: &Params,
) -> Markup {
    let kind = criteria.kind.map(PriceType::as_str).unwrap_or("all");
    let export_href = match params.without("limit") {
        q if q.is_empty() => "/transactions/export".to_string(),
        q => format!("/transactions/export?{q}"),
    };

    desktop_layout(
        "Transactions",
        "/transactions",
        html! {
            section class="page-hero" {
                h1 { "Real Estate Transactions" }
                p class="lead" { "Recent sales and rentals recorded across the UAE." }
            }
            div class="container" {
                div class="stats-row" {
                    div class="stat" { p class="muted" { "Total Volume" } strong { (format_price(stats.total_volume)) } }
                    div class="stat" { p class="muted" { "Average Price" } strong { (format_price(stats.average_price)) } }
                    div class="stat" { p class="muted" { "Sales" } strong { (stats.sales_count) } }
                    div class="stat" { p class="muted" { "Rentals" } strong { (stats.rent_count) } }
                }

                form class="filters inline" action="/transactions" method="get" {
                    input type="text" name="q" placeholder="Search by area"
                        value=[criteria.query.as_ref().map(|q| q.as_str())];
                    select name="kind" {
                        option value="all" selected[kind == "all"] { "All Types" }
                        option value="sale" selected[kind == "sale"] { "Sales" }
                        option value="rent" selected[kind == "rent"] { "Rentals" }
                    }
                    button type="submit" class="btn btn-primary" { "Filter" }
                    a href=(export_href) class="btn btn-outline" { "Export" }
                }

                @if rows.is_empty() {
                    (empty_state("No transactions found", "Try a different area or type."))
                } @else {
                    table class="transactions" {
                        thead {
                            tr { th { "Date" } th { "Type" } th { "Area" } th { "Property" } th { "Size" } th { "Price" } }
                        }
                        tbody {
                            @for t in rows {
                                tr {
                                    td { (format_date(t.date)) }
                                    td {
                                        @if t.transaction_type == PriceType::Sale {
                                            span class="tag tag-success" { "Sale" }
                                        } @else {
                                            span class="tag tag-primary" { "Rent" }
                                        }
                                    }
                                    td { (t.area) }
                                    td { (t.property_type) }
                                    td { (group_thousands(t.size.round() as u64)) " sqft" }
                                    td { (format_price(t.price)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
