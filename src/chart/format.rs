// src/chart/format.rs

//! Numeric label formatting shared by the axis and the bar-top labels.
//!
//! The two differ only in sub-million rounding: axis ticks keep one decimal
//! (`2500` → `"2.5k"`), bar labels round to whole thousands (`2500` →
//! `"3k"`). Matrix cells do not use these; they format as percentages in
//! [`super::matrix`].

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Axis tick label: `1_200_000` → `"1.2M"`, `2500` → `"2.5k"`, `42` → `"42"`.
pub fn axis_label(value: f64) -> String {
    if value >= MILLION {
        format!("{:.1}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("{:.1}k", value / THOUSAND)
    } else {
        plain(value)
    }
}

/// Bar-top label (including the stacked total): `2500` → `"3k"`.
pub fn bar_label(value: f64) -> String {
    if value >= MILLION {
        format!("{:.1}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("{:.0}k", value / THOUSAND)
    } else {
        plain(value)
    }
}

/// Raw rendering without a trailing `.0` on whole numbers.
fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
