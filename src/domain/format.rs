// src/domain/format.rs

use super::property::{AreaUnit, PriceType, Property};
use chrono::{DateTime, NaiveDate, Utc};

pub const CURRENCY: &str = "AED";

/// "AED 1.2M", "AED 750K", or grouped digits below a thousand.
pub fn format_price(price: u64) -> String {
    if price >= 1_000_000 {
        return format!("{CURRENCY} {:.1}M", price as f64 / 1_000_000.0);
    }
    if price >= 1_000 {
        return format!("{CURRENCY} {:.0}K", price as f64 / 1_000.0);
    }
    format!("{CURRENCY} {}", group_thousands(price))
}

pub fn format_price_range(min: u64, max: u64) -> String {
    format!("{} - {}", format_price(min), format_price(max))
}

/// Card price: rent listings carry their period.
pub fn format_listing_price(property: &Property) -> String {
    match (property.price_type, property.rent_period) {
        (PriceType::Rent, Some(period)) => {
            format!("{} / {}", format_price(property.price), period.suffix())
        }
        _ => format_price(property.price),
    }
}

pub fn format_area(area: f64, unit: AreaUnit) -> String {
    format!("{} {}", group_thousands(area.round().max(0.0) as u64), unit.as_str())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().unsigned_abs();
    let days = secs.div_ceil(86_400);

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d if d < 365 => format!("{} months ago", d / 30),
        d => format!("{} years ago", d / 365),
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ')
        .collect();

    kept.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim())
}

/// "1 property", "3 properties".
pub fn count_label(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn encode_component(raw: &str) -> String {
    // form encoding turns spaces into '+'; literal '+' is already %2B
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(phone),
        encode_component(message)
    )
}

pub fn email_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

pub fn phone_link(phone: &str) -> String {
    format!("tel:{}", digits_only(phone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn price_uses_compact_units() {
        assert_eq!(format_price(2_000_000), "AED 2.0M");
        assert_eq!(format_price(1_200_000), "AED 1.2M");
        assert_eq!(format_price(750_000), "AED 750K");
        assert_eq!(format_price(950), "AED 950");
        assert_eq!(
            format_price_range(750_000, 2_000_000),
            "AED 750K - AED 2.0M"
        );
    }

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(format_area(1250.4, AreaUnit::Sqft), "1,250 sqft");
    }

    #[test]
    fn dates() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(d), "January 5, 2024");

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(format_relative_date(now, now), "Today");
        assert_eq!(
            format_relative_date(now - chrono::Duration::hours(20), now),
            "Yesterday"
        );
        assert_eq!(
            format_relative_date(now - chrono::Duration::days(3), now),
            "3 days ago"
        );
        assert_eq!(
            format_relative_date(now - chrono::Duration::days(15), now),
            "2 weeks ago"
        );
        assert_eq!(
            format_relative_date(now - chrono::Duration::days(400), now),
            "1 years ago"
        );
    }

    #[test]
    fn slugs_and_truncation() {
        assert_eq!(slugify("Modern Villa,  Palm Jumeirah!"), "modern-villa-palm-jumeirah");
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 9), "a longer...");
    }

    #[test]
    fn counts_are_pluralized() {
        assert_eq!(count_label(0, "property", "properties"), "0 properties");
        assert_eq!(count_label(1, "property", "properties"), "1 property");
        assert_eq!(count_label(12, "agent", "agents"), "12 agents");
    }

    #[test]
    fn contact_links() {
        assert_eq!(phone_link("+971 50 123 4567"), "tel:971501234567");
        assert_eq!(
            whatsapp_link("+971 50 123", "Hi there"),
            "https://wa.me/97150123?text=Hi%20there"
        );
        assert_eq!(
            email_link("a@b.com", "Villa", "1+1"),
            "mailto:a@b.com?subject=Villa&body=1%2B1"
        );
    }
}
