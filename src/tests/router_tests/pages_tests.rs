// src/tests/router_tests/pages_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, post_form, test_state};

#[test]
fn every_page_renders() {
    let state = test_state();

    for path in [
        "/",
        "/search",
        "/property/modern-villa-palm-jumeirah",
        "/agents",
        "/areas",
        "/blog",
        "/projects",
        "/transactions",
        "/careers",
        "/contact",
        "/sell",
        "/estimate",
        "/about",
        "/login",
        "/login?mode=signup",
    ] {
        let resp = handle(get(path), &state).unwrap_or_else(|e| panic!("{path}: {e}"));
        assert_eq!(resp.status(), 200, "{path}");
        let ct = resp
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert!(ct.starts_with("text/html"), "{path}: {ct}");

        let body = body_string(resp);
        assert!(body.starts_with("<!DOCTYPE html>"), "{path}");
        assert!(body.contains("AtogGPT"), "{path} is missing the assistant");
    }
}

#[test]
fn unknown_paths_and_slugs_are_not_found() {
    let state = test_state();

    for path in ["/nope", "/property/no-such-home", "/property/", "/search/extra"] {
        assert!(
            matches!(handle(get(path), &state), Err(ServerError::NotFound)),
            "{path}"
        );
    }
    // wrong method
    assert!(matches!(
        handle(post_form("/search", ""), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn property_detail_shows_similar_and_financing() {
    let state = test_state();
    let body = body_string(handle(get("/property/modern-villa-palm-jumeirah"), &state).unwrap());

    assert!(body.contains("Modern Villa with Private Beach"));
    assert!(body.contains("AED 18.5M"));
    assert!(body.contains("Sarah Mitchell"));
    assert!(body.contains("Mortgage Calculator"));
    assert!(body.contains("Similar Properties"));
    // same location area
    assert!(body.contains("Penthouse with Private Pool for Rent"));
    assert!(!body.contains("Marina View Studio"));
}

#[test]
fn rent_listing_has_no_mortgage_block() {
    let state = test_state();
    let body = body_string(handle(get("/property/marina-two-bedroom-rent"), &state).unwrap());
    assert!(body.contains("AED 145K / year"));
    assert!(!body.contains("Mortgage Calculator"));
}

#[test]
fn agents_default_to_rating_order() {
    let state = test_state();
    let body = body_string(handle(get("/agents?superAgent=1"), &state).unwrap());

    assert!(body.contains("3 agents found"));
    assert!(!body.contains("James Carter"));
    let sarah = body.find("Sarah Mitchell").unwrap();
    let fatima = body.find("Fatima Al Mansoori").unwrap();
    let omar = body.find("Omar Haddad").unwrap();
    // ties keep fixture order
    assert!(sarah < fatima && fatima < omar);
}

#[test]
fn agent_cards_link_social_profiles() {
    let state = test_state();
    let body = body_string(handle(get("/agents"), &state).unwrap());
    assert!(body.contains("href=\"https://linkedin.com/in/sarahmitchell\""));
}

#[test]
fn blog_category_filter_hides_featured_post() {
    let state = test_state();

    let all = body_string(handle(get("/blog"), &state).unwrap());
    assert!(all.contains("featured-post"));
    assert!(all.contains("Dubai Property Market Outlook 2024"));

    let investment = body_string(handle(get("/blog?category=Investment"), &state).unwrap());
    assert!(investment.contains("Rental Yields by Community"));
    assert!(investment.contains("Golden Visa Through Property Investment"));
    assert!(!investment.contains("featured-post"));
    assert!(!investment.contains("Dubai Property Market Outlook 2024"));
}

#[test]
fn careers_filter_by_department() {
    let state = test_state();
    let body = body_string(handle(get("/careers?department=Engineering"), &state).unwrap());
    assert!(body.contains("Senior Frontend Developer"));
    assert!(!body.contains("Data Analyst"));

    let body = body_string(handle(get("/careers?q=designer"), &state).unwrap());
    assert!(body.contains("UX Designer"));
    assert!(!body.contains("Product Manager"));
}

#[test]
fn projects_filter_by_status() {
    let state = test_state();
    let body = body_string(handle(get("/projects?status=ready"), &state).unwrap());
    assert!(body.contains("2 projects"));
    assert!(body.contains("Dubai Hills Park Heights"));
    assert!(!body.contains("DAMAC Lagoons"));
}

#[test]
fn transactions_filter_and_export() {
    let state = test_state();

    let body = body_string(handle(get("/transactions?kind=rent&q=marina"), &state).unwrap());
    assert!(body.contains("Dubai Marina"));
    assert!(!body.contains("Palm Jumeirah</td>"));
    assert!(body.contains("/transactions/export?kind=rent&amp;q=marina"));

    let resp = handle(get("/transactions/export?kind=sale"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(disposition.contains("atog_transactions.xlsx"));
    assert_eq!(&body_bytes(resp)[..2], b"PK");
}

#[test]
fn health_is_plain_text() {
    let state = test_state();
    let resp = handle(get("/health"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}
