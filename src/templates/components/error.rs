use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page inside the site chrome.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        "",
        html! {
            section class="container narrow error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "\u{2190} Back to home" } }
            }
        },
    )
}
