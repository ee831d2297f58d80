// src/chart/palette.rs

//! Positional series colors.
//!
//! Four fixed colors assigned by series declaration index; a fifth series
//! wraps around to the first color rather than inventing hues.

/// The fixed multi-series palette (indigo, emerald, amber, violet).
pub const PALETTE: [&str; 4] = ["#4F46E5", "#10B981", "#F59E0B", "#8B5CF6"];

/// Color for the series at `index`, cycling past the palette end.
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
