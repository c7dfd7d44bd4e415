// templates/filters.rs
//
// Display helpers used by the page templates. All of them are pure.

use crate::domain::timestamp::{parse_str, parse_timestamp};
use chrono::{DateTime, Utc};
use serde_json::Value;

const NBSP: char = '\u{a0}';
const INVALID_DATE: &str = "Invalid date";

/// Formats a price as Czech crowns with no decimals, e.g. `1 250 000 Kč`
/// (non-breaking spaces). Anything that is not a number is shown as-is.
pub fn to_currency(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(amount) => format_czk(amount),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn format_czk(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    // cs-CZ only groups once there are at least five integer digits.
    let grouped = if digits.len() < 5 {
        digits
    } else {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(NBSP);
            }
            out.push(ch);
        }
        out
    };

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}{NBSP}Kč")
}

/// Renders a fraction as a percentage: `0.0712` with 1 decimal is `7.1%`.
/// A missing value counts as 0 and missing decimals default to 2.
pub fn to_percentage(value: Option<f64>, decimals: Option<u32>) -> String {
    let value = value.filter(|v| !v.is_nan()).unwrap_or(0.0);
    let decimals = decimals.unwrap_or(2);

    let scale = 10f64.powi(decimals as i32);
    let mut pct = js_round(value * 100.0 * scale) / scale;
    if pct == 0.0 {
        pct = 0.0; // drop the sign of -0
    }

    format!("{pct}%")
}

/// Rounds half up, towards positive infinity.
fn js_round(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// "3 days ago", "in an hour" etc.
pub fn from_now(value: &Value) -> String {
    from_now_at(value, Utc::now())
}

pub fn from_now_at(value: &Value, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(value) else {
        return INVALID_DATE.to_string();
    };

    let diff = now.signed_duration_since(then).num_milliseconds();
    let phrase = relative_phrase(diff.unsigned_abs() as f64);

    if diff < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn relative_phrase(ms: f64) -> String {
    let days_exact = ms / 86_400_000.0;

    let seconds = js_round(ms / 1_000.0);
    let minutes = js_round(ms / 60_000.0);
    let hours = js_round(ms / 3_600_000.0);
    let days = js_round(days_exact);
    let months = js_round(days_exact * 4_800.0 / 146_097.0);
    let years = js_round(days_exact * 400.0 / 146_097.0);

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Long date with time, e.g. `January 1, 2020 12:00 AM`.
pub fn long_date(value: &str) -> String {
    match parse_str(value) {
        Some(dt) => dt.format("%B %-d, %Y %-I:%M %p").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
