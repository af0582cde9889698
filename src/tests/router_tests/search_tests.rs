// src/tests/router_tests/search_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

fn search(query: &str) -> String {
    let state = test_state();
    let resp = handle(get(&format!("/search?{query}")), &state).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn defaults_to_properties_for_sale() {
    let body = search("");
    assert!(body.contains("Properties for Sale"));
    assert!(body.contains("9 properties found"));
    assert!(body.contains("Modern Villa with Private Beach"));
    assert!(!body.contains("Marina Two Bedroom for Rent"));
}

#[test]
fn rent_purpose_shows_rentals_with_period() {
    let body = search("purpose=rent");
    assert!(body.contains("Properties for Rent"));
    assert!(body.contains("4 properties found"));
    assert!(body.contains(" / monthly"));
    assert!(body.contains("AED 145K / year"));
    assert!(!body.contains("Modern Villa with Private Beach"));
}

#[test]
fn studio_filter_keeps_zero_bedrooms() {
    let body = search("bedrooms=studio");
    assert!(body.contains("3 properties found"));
    assert!(body.contains("Marina View Studio"));
    assert!(!body.contains("Luxury Apartment with Burj Views"));
}

#[test]
fn hero_price_range_and_type() {
    let body = search("purpose=buy&type=villa&price=5000000-");
    assert!(body.contains("1 property found"));
    assert!(body.contains("Modern Villa with Private Beach"));

    let body = search("price=0-1000000");
    assert!(body.contains("1 property found"));
    assert!(body.contains("Marina View Studio"));
}

#[test]
fn malformed_filters_are_ignored() {
    let body = search("priceMin=cheap&bedrooms=lots&sort=random&status=all");
    assert!(body.contains("9 properties found"));
}

#[test]
fn unknown_type_is_an_empty_state() {
    let body = search("type=castle");
    assert!(body.contains("0 properties found"));
    assert!(body.contains("No properties found"));
}

#[test]
fn price_low_sort_orders_cards() {
    let body = search("sort=price-low");
    let studio = body.find("Marina View Studio").unwrap();
    let hills = body.find("Off-Plan One Bedroom at Dubai Hills").unwrap();
    let villa = body.find("Modern Villa with Private Beach").unwrap();
    assert!(studio < hills && hills < villa);
}

#[test]
fn limit_drives_load_more() {
    let body = search("limit=2");
    assert!(body.contains("Showing 2 of 9"));
    assert!(body.contains("/search?limit=14"));

    let body = search("limit=50");
    assert!(!body.contains("Load More"));
}

#[test]
fn list_view_uses_horizontal_cards() {
    let body = search("view=list");
    assert!(body.contains("property-card horizontal"));

    let body = search("view=grid");
    assert!(!body.contains("property-card horizontal"));
}

#[test]
fn free_text_searches_titles() {
    let body = search("q=PENTHOUSE");
    assert!(body.contains("Sky Penthouse in Business Bay"));
    assert!(body.contains("1 property found"));
}

#[test]
fn decimal_price_bounds_still_filter() {
    let whole = search("priceMin=1000000");
    assert!(whole.contains("8 properties found"));

    let decimal = search("priceMin=1000000.5");
    assert!(decimal.contains("8 properties found"));
    assert!(!decimal.contains("Marina View Studio"));
}
