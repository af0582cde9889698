// templates/pages/forms.rs
//
// Contact, sell and sign-in pages. Each form posts back to its own path
// and swaps the confirmation into a result slot.

use crate::domain::PropertyType;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

fn result_slot(id: &str) -> Markup {
    html! { div id=(id) {} }
}

pub fn contact_page() -> Markup {
    desktop_layout(
        "Contact Us",
        "/contact",
        html! {
            section class="page-hero" {
                h1 { "Get in Touch" }
                p class="lead" { "Questions about buying, selling or renting? Our team is here to help." }
            }
            div class="container two-col" {
                div {
                    (card("Phone", html! { p { a href="tel:+971800ATOG" { "800-ATOG (2864)" } } }))
                    (card("Email", html! { p { a href="mailto:hello@atog.com" { "hello@atog.com" } } }))
                    (card("Address", html! { p { "Level 12, Boulevard Plaza, Downtown Dubai" } }))
                    (card("Working Hours", html! { p { "Sunday - Thursday, 9:00 AM - 6:00 PM" } }))
                }
                section class="card" {
                    h2 { "Send us a Message" }
                    form method="post" action="/contact" hx-post="/contact" hx-target="#contact-result" hx-swap="innerHTML" {
                        input type="text" name="name" placeholder="Your name" required;
                        input type="email" name="email" placeholder="Email address" required;
                        input type="tel" name="phone" placeholder="Phone number";
                        select name="subject" {
                            option value="buying" { "Buying a property" }
                            option value="selling" { "Selling a property" }
                            option value="renting" { "Renting" }
                            option value="other" { "Something else" }
                        }
                        textarea name="message" placeholder="How can we help?" required {}
                        button type="submit" class="btn btn-primary" { "Send Message" }
                    }
                    (result_slot("contact-result"))
                }
            }
        },
    )
}

const SELL_STEPS: [(&str, &str); 4] = [
    ("List Your Property", "Tell us about your home in a few minutes."),
    ("Get Matched", "We pair you with a specialist agent for your area."),
    ("Review & Approve", "Approve the valuation, photos and listing."),
    ("Sell & Celebrate", "Close the deal with a verified buyer."),
];

pub fn sell_page() -> Markup {
    desktop_layout(
        "Sell Your Property",
        "/sell",
        html! {
            section class="page-hero" {
                h1 { "Sell Your Property with Confidence" }
                p class="lead" { "Maximum exposure, expert agents and a secure process from listing to handover." }
            }
            div class="container" {
                h2 { "How It Works" }
                ol class="steps" {
                    @for (title, text) in SELL_STEPS {
                        li { strong { (title) } p { (text) } }
                    }
                }

                section class="card" {
                    h2 { "Tell Us About Your Property" }
                    form method="post" action="/sell" hx-post="/sell" hx-target="#sell-result" hx-swap="innerHTML" {
                        input type="text" name="name" placeholder="Full name" required;
                        input type="email" name="email" placeholder="Email address" required;
                        input type="tel" name="phone" placeholder="Phone number" required;
                        input type="text" name="location" placeholder="Area/Building";
                        select name="propertyType" {
                            @for t in PropertyType::ALL {
                                option value=(t.as_str()) { (t.label()) }
                            }
                        }
                        input type="number" name="bedrooms" min="0" placeholder="Bedrooms";
                        input type="number" name="askingPrice" min="0" placeholder="Asking price (AED)";
                        button type="submit" class="btn btn-primary" { "Request a Call Back" }
                    }
                    (result_slot("sell-result"))
                }
            }
        },
    )
}

/// Sign in and sign up share one page; `mode=signup` shows the extra fields.
pub fn login_page(signup: bool) -> Markup {
    desktop_layout(
        if signup { "Create Account" } else { "Sign in" },
        "/login",
        html! {
            section class="container narrow" {
                h1 { @if signup { "Create your account" } @else { "Welcome back" } }
                form method="post" action="/login" hx-post="/login" hx-target="#login-result" hx-swap="innerHTML" {
                    input type="hidden" name="mode" value=(if signup { "signup" } else { "signin" });
                    @if signup {
                        input type="text" name="name" placeholder="Enter your name" required;
                    }
                    input type="email" name="email" placeholder="Enter your email" autocomplete="email" required;
                    input type="password" name="password" placeholder="Enter your password" required;
                    @if signup {
                        input type="password" name="confirmPassword" placeholder="Confirm your password" required;
                    }
                    button type="submit" class="btn btn-primary" {
                        @if signup { "Create Account" } @else { "Sign In" }
                    }
                }
                (result_slot("login-result"))
                p class="muted" {
                    @if signup {
                        "Already have an account? " a href="/login" { "Sign in" }
                    } @else {
                        "Don't have an account? " a href="/login?mode=signup" { "Sign up" }
                    }
                }
            }
        },
    )
}
