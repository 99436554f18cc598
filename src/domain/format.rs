//! Display helpers shared by the CLI and the web screens.

use chrono::{DateTime, Utc};

/// `52_300_000.0 -> "52.3M"`, `772e9 -> "772B"`, `950.0 -> "950"`.
///
/// The unit is picked after rounding, so `999_950.0` is `"1M"`.
pub fn compact(value: f64) -> String {
    const SUFFIXES: [&str; 4] = ["K", "M", "B", "T"];
    let mut scaled = value;
    let mut suffix = "";
    for next in SUFFIXES {
        if round_tenth(scaled).abs() < 1000.0 {
            break;
        }
        scaled /= 1000.0;
        suffix = next;
    }
    format!("{}{}", trim_decimal(scaled), suffix)
}

fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

// One decimal, dropped when it is zero.
fn trim_decimal(value: f64) -> String {
    let s = format!("{:.1}", value);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

/// Two decimals with thousands separators: `1234567.891 -> "1,234,567.89"`.
pub fn grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{out}.{frac}")
}

pub fn money(currency: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{currency}{}", grouped(-value))
    } else {
        format!("{currency}{}", grouped(value))
    }
}

/// Money with an explicit `+` on gains.
pub fn signed_money(currency: &str, value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", money(currency, value))
    } else {
        money(currency, value)
    }
}

pub fn signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// `+2.15 (+1.24%)` style daily change.
pub fn change(currency: &str, change: f64, change_percent: f64) -> String {
    format!(
        "{} ({})",
        signed_money(currency, change),
        signed_percent(change_percent)
    )
}

pub fn time_ago(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - published).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}
