use crate::services::assistant::{QUICK_PROMPTS, WELCOME};
use maud::{html, Markup};

/// Floating assistant. Messages post to `/assistant` and the reply is
/// appended to the log.
pub fn chat_widget() -> Markup {
    html! {
        details class="chat-widget" {
            summary { "AtogGPT" }
            div id="chat-log" class="chat-log" {
                (chat_message("assistant", WELCOME))
            }
            div class="quick-prompts" {
                @for prompt in QUICK_PROMPTS {
                    button
                        type="button"
                        hx-post="/assistant"
                        hx-vals=(format!(r#"{{"message": "{prompt}"}}"#))
                        hx-target="#chat-log"
                        hx-swap="beforeend"
                    { (prompt) }
                }
            }
            form hx-post="/assistant" hx-target="#chat-log" hx-swap="beforeend" {
                input type="text" name="message" placeholder="Ask me anything about real estate..." autocomplete="off";
                button type="submit" class="btn btn-primary" { "Send" }
            }
        }
    }
}

/// One chat bubble. Line breaks in canned replies become `<br>`.
pub fn chat_message(role: &str, text: &str) -> Markup {
    html! {
        div class=(format!("chat-message {role}")) {
            @for (i, line) in text.lines().enumerate() {
                @if i > 0 { br; }
                (line)
            }
        }
    }
}

/// What `/assistant` returns: the visitor's message followed by the reply.
pub fn chat_exchange(message: &str, reply: &str) -> Markup {
    html! {
        @if !message.trim().is_empty() {
            (chat_message("user", message))
        }
        (chat_message("assistant", reply))
    }
}
