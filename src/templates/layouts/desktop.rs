use crate::templates::components::chat_widget;
use maud::{html, Markup, DOCTYPE};

const NAVIGATION: [(&str, &str); 4] = [
    ("Find Agent", "/agents"),
    ("Sell Property", "/sell"),
    ("AtogEstimate\u{2122}", "/estimate"),
    ("Transactions", "/transactions"),
];

const MORE_LINKS: [(&str, &str); 6] = [
    ("New Projects", "/projects"),
    ("Area Guides", "/areas"),
    ("Blog", "/blog"),
    ("About Us", "/about"),
    ("Contact", "/contact"),
    ("Careers", "/careers"),
];

const FOOTER_PROPERTIES: [(&str, &str); 4] = [
    ("Properties for Sale", "/search?purpose=buy"),
    ("Properties for Rent", "/search?purpose=rent"),
    ("Off-Plan Properties", "/search?status=off-plan"),
    ("Commercial Properties", "/search?type=commercial"),
];

const POPULAR_AREAS: [&str; 6] = [
    "Downtown Dubai",
    "Dubai Marina",
    "Palm Jumeirah",
    "Business Bay",
    "Dubai Hills",
    "Arabian Ranches",
];

/// Page shell: header nav, content, footer and the floating assistant.
/// `current` is the request path, used to highlight the active nav link.
pub fn desktop_layout(title: &str, current: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Atog" }
                meta name="description" content="Find your dream property in the UAE. Buy, rent or sell with Atog.";
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" {
                        span class="logo-mark" { "A" }
                        span class="logo-text" { "Atog" }
                    }
                    nav {
                        ul {
                            @for (name, href) in NAVIGATION {
                                li { a href=(href) class=[(current == href).then_some("active")] { (name) } }
                            }
                            li class="dropdown" {
                                span { "More" }
                                ul {
                                    @for (name, href) in MORE_LINKS {
                                        li { a href=(href) class=[(current == href).then_some("active")] { (name) } }
                                    }
                                }
                            }
                        }
                    }
                    a href="/login" class="btn btn-outline" { "Sign In" }
                }

                main { (content) }

                footer class="site-footer" {
                    div class="footer-grid" {
                        div {
                            span class="logo-text" { "Atog" }
                            p { "Your trusted partner in finding the perfect property in the UAE." }
                            p { a href="tel:+971800ATOG" { "800-ATOG" } }
                            p { a href="mailto:hello@atog.com" { "hello@atog.com" } }
                        }
                        div {
                            h4 { "Properties" }
                            ul {
                                @for (name, href) in FOOTER_PROPERTIES {
                                    li { a href=(href) { (name) } }
                                }
                            }
                        }
                        div {
                            h4 { "Company" }
                            ul {
                                @for (name, href) in MORE_LINKS {
                                    li { a href=(href) { (name) } }
                                }
                            }
                        }
                        div {
                            h4 { "Popular Areas" }
                            ul {
                                @for area in POPULAR_AREAS {
                                    li { a href=(format!("/search?q={}", area.replace(' ', "+"))) { (area) } }
                                }
                            }
                        }
                    }
                    p class="copyright" { "\u{a9} 2024 Atog. All rights reserved." }
                }

                (chat_widget())
            }
        }
    }
}
