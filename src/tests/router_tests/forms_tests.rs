// src/tests/router_tests/forms_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, post_form, test_state};

fn post_ok(path: &str, form: &str) -> String {
    let state = test_state();
    let resp = handle(post_form(path, form), &state).unwrap_or_else(|e| panic!("{path}: {e}"));
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

fn post_err(path: &str, form: &str) -> ServerError {
    let state = test_state();
    match handle(post_form(path, form), &state) {
        Ok(resp) => panic!("{path} unexpectedly returned {}", resp.status()),
        Err(e) => e,
    }
}

#[test]
fn contact_form_confirms() {
    let body = post_ok(
        "/contact",
        "name=Lina&email=lina%40example.com&subject=buying&message=Looking+for+a+villa",
    );
    assert!(body.contains("Thank you, Lina!"));
    // fragment, not a full page
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn contact_form_requires_fields() {
    let err = post_err("/contact", "name=Lina&email=lina%40example.com");
    assert!(matches!(err, ServerError::BadRequest(ref m) if m.contains("message")));

    let err = post_err("/contact", "name=Lina&email=not-an-email&message=hi");
    assert!(matches!(err, ServerError::BadRequest(ref m) if m.contains("invalid email")));

    // whitespace only counts as missing
    let err = post_err("/contact", "name=+++&email=a%40b.com&message=hi");
    assert_eq!(err.status(), 400);
}

#[test]
fn sell_form_needs_a_phone() {
    let body = post_ok(
        "/sell",
        "name=Omar&email=omar%40example.com&phone=%2B971501234567&location=JLT&propertyType=apartment",
    );
    assert!(body.contains("Thanks, Omar!"));

    let err = post_err("/sell", "name=Omar&email=omar%40example.com");
    assert_eq!(err.status(), 400);
}

#[test]
fn career_application() {
    let body = post_ok(
        "/careers/apply",
        "name=Ana&email=ana%40example.com&position=UX+Designer",
    );
    assert!(body.contains("UX Designer"));

    let err = post_err("/careers/apply", "name=Ana&email=ana%40example.com");
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn estimate_returns_a_result_fragment() {
    let body = post_ok(
        "/estimate",
        "location=Dubai+Marina&propertyType=apartment&bedrooms=2&area=1200&purpose=sale",
    );
    assert!(body.contains("Your AtogEstimate"));
    assert!(body.contains("Dubai Marina"));
    assert!(body.contains("Estimated range: AED"));

    // garbage numbers fall back to defaults rather than failing
    let body = post_ok("/estimate", "bedrooms=x&area=-5");
    assert!(body.contains("Price per sqft"));
}

#[test]
fn assistant_replies_by_keyword() {
    let body = post_ok("/assistant", "message=How+much+is+a+mortgage%3F");
    assert!(body.contains("How much is a mortgage?"));
    assert!(body.contains("Down Payment (20%)"));

    let body = post_ok("/assistant", "message=");
    assert!(body.contains("I&#39;m AtogGPT") || body.contains("I'm AtogGPT"));
}

#[test]
fn login_and_signup() {
    let body = post_ok("/login", "mode=signin&email=a%40b.com&password=secret");
    assert!(body.contains("not available yet"));

    let body = post_ok(
        "/login",
        "mode=signup&name=Sam&email=sam%40b.com&password=pw1&confirmPassword=pw1",
    );
    assert!(body.contains("Welcome to Atog, Sam!"));

    let err = post_err(
        "/login",
        "mode=signup&name=Sam&email=sam%40b.com&password=pw1&confirmPassword=pw2",
    );
    assert!(matches!(err, ServerError::BadRequest(ref m) if m == "passwords do not match"));

    assert_eq!(post_err("/login", "email=a%40b.com").status(), 400);
}

#[test]
fn oversized_form_is_rejected_whole() {
    let form = format!(
        "name=Lina&email=lina%40example.com&message={}&subject=buying",
        "a".repeat(70 * 1024)
    );
    let err = post_err("/contact", &form);
    assert!(matches!(err, ServerError::BadRequest(ref m) if m == "form body too large"));

    // just under the cap is still accepted
    let fits = format!(
        "name=Lina&email=lina%40example.com&message={}",
        "a".repeat(60 * 1024)
    );
    assert!(post_ok("/contact", &fits).contains("Thank you, Lina!"));
}
