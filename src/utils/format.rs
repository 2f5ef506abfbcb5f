use chrono::{DateTime, Utc};

/// Display form of an amount, rounded to cents: `$26.00`
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Display form of an order date: `18 October 2026 14:05`
pub fn format_order_date(date: &DateTime<Utc>) -> String {
    date.format("%d %B %Y %H:%M").to_string()
}
