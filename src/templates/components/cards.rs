use crate::domain::format::{
    format_date, format_price, format_price_range, phone_link, truncate_text, whatsapp_link,
};
use crate::domain::{Agent, Area, Blog, Project};
use crate::services::calculate_roi;
use maud::{html, Markup};

pub fn agent_card(a: &Agent) -> Markup {
    html! {
        article class="agent-card" {
            div class="avatar" {
                @if a.avatar.is_empty() {
                    span class="initials" { (a.initials()) }
                } @else {
                    img src=(a.avatar) alt=(a.name) loading="lazy";
                }
                @if a.super_agent { span class="tag tag-secondary" { "Super Agent" } }
            }
            h3 {
                (a.name)
                @if a.verified { " " span class="verified" title="Verified" { "\u{2713}" } }
            }
            @if let Some(agency) = a.agency_name() {
                p class="muted" { (agency) }
            }
            p class="rating" { (format!("{:.1}", a.rating)) " (" (a.reviews_count) " reviews)" }
            div class="stats" {
                span { (a.properties_count) " Properties" }
                span { (a.experience) " Years" }
            }
            @if !a.specializations.is_empty() {
                ul class="tags" {
                    @for s in a.specializations.iter().take(3) { li { (s) } }
                }
            }
            p class="muted" { "Speaks " (a.languages.join(", ")) }
            @let links = &a.social_links;
            @if links.linkedin.is_some() || links.instagram.is_some() || links.twitter.is_some() {
                div class="social" {
                    @if let Some(url) = &links.linkedin { a href=(url) rel="noopener" { "LinkedIn" } }
                    @if let Some(url) = &links.instagram { a href=(url) rel="noopener" { "Instagram" } }
                    @if let Some(url) = &links.twitter { a href=(url) rel="noopener" { "X" } }
                }
            }
            div class="actions" {
                a href=(phone_link(&a.phone)) class="btn btn-outline" { "Call" }
                @if let Some(wa) = &a.whatsapp {
                    a href=(whatsapp_link(wa, &format!("Hi {}, I found you on Atog.", a.name))) class="btn btn-primary" { "WhatsApp" }
                }
            }
        }
    }
}

pub fn project_card(p: &Project) -> Markup {
    html! {
        article class="project-card" {
            @if let Some(img) = p.images.first() {
                img src=(img) alt=(p.name) loading="lazy";
            }
            span class="tag tag-primary" { (p.status.label()) }
            h3 { (p.name) }
            p class="muted" { "by " (p.developer.name) }
            p class="muted" { (p.location.area) ", " (p.location.city) }
            p class="price" { (format_price_range(p.price_from, p.price_to)) }
            p { "Completion: " (p.completion_date.format("%b %Y")) }
            @if let Some(plan) = &p.payment_plan {
                p class="muted" { "Payment plan " (plan) }
            }
        }
    }
}

pub fn blog_card(b: &Blog) -> Markup {
    html! {
        article class="blog-card" {
            img src=(b.cover_image) alt=(b.title) loading="lazy";
            span class="tag tag-accent" { (b.category) }
            h3 { (b.title) }
            p { (truncate_text(&b.excerpt, 140)) }
            p class="muted" {
                (b.author.name) " \u{b7} " (format_date(b.published_at)) " \u{b7} " (b.read_time) " min read"
            }
        }
    }
}

pub fn area_card(a: &Area) -> Markup {
    html! {
        article class="area-card" {
            img src=(a.image) alt=(a.name) loading="lazy";
            h3 { (a.name) }
            p class="muted" { (a.city) }
            div class="stats" {
                a href=(format!("/search?purpose=buy&q={}", a.name.replace(' ', "+"))) {
                    (a.properties_for_sale) " for sale"
                }
                a href=(format!("/search?purpose=rent&q={}", a.name.replace(' ', "+"))) {
                    (a.properties_for_rent) " for rent"
                }
            }
            p { "Avg. sale " (format_price(a.average_sale_price)) }
            p { "Avg. rent " (format_price(a.average_rent_price)) " / year" }
            p class="muted" {
                "Gross yield "
                (format!("{:.1}%", calculate_roi(a.average_sale_price as f64, a.average_rent_price as f64)))
            }
            @if !a.highlights.is_empty() {
                ul class="tags" {
                    @for h in &a.highlights { li { (h) } }
                }
            }
        }
    }
}
