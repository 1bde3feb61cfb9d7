//! Locale display formatting for the platform's Indonesian audience.
//!
//! Pure functions, no I/O. Dates render as the id-ID short form
//! (`1/3/2024`), times as `HH:MM`, and amounts as whole-rupiah currency
//! with dot grouping (`Rp 50.000`). Malformed input propagates the chrono
//! parse error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Render an ISO-ish date or datetime string as an id-ID short date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, and RFC 3339 timestamps.
///
/// ```rust
/// assert_eq!(bioskop_client::format::format_date("2024-03-01").unwrap(), "1/3/2024");
/// ```
pub fn format_date(input: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(input).map(|dt| dt.date_naive()))?;
    Ok(format!("{}/{}/{}", date.day(), date.month(), date.year()))
}

/// Reduce a `HH:MM[:SS]` time string to `HH:MM`.
pub fn format_time(input: &str) -> Result<String, chrono::ParseError> {
    let time = NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))?;
    Ok(time.format("%H:%M").to_string())
}

/// Render an amount as whole-rupiah currency: `50000.0` → `"Rp 50.000"`.
///
/// Fractional amounts round to the nearest rupiah, halves away from zero;
/// negative amounts keep the sign in front of the symbol.
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let rupiah = amount.abs().round() as u64;
    let grouped = group_thousands(rupiah);
    if negative && rupiah > 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
