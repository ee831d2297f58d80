// src/chart/matrix.rs

//! Percentage-heatmap cell policy.
//!
//! Matrix cells hold values in `[0, 100]`. Shading scales linearly with the
//! value up to [`MAX_OPACITY`]; past the midpoint the cell is dark enough
//! that the label flips to light text.

/// Full-intensity cell opacity. Values at or above 100 saturate here.
pub const MAX_OPACITY: f64 = 0.85;

/// Render policy for one matrix cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    /// Background opacity in `[0, MAX_OPACITY]`.
    pub opacity: f64,

    /// Use light text against the darker backgrounds (value above 50).
    pub light_text: bool,

    /// Display string, one decimal with a trailing percent sign.
    pub display: String,
}

/// Style for a cell value. Out-of-range values clamp into `[0, 100]` for
/// the shading but display as sent.
pub fn cell_style(value: f64) -> CellStyle {
    let fraction = value.clamp(0.0, 100.0) / 100.0;
    CellStyle {
        opacity: fraction * MAX_OPACITY,
        light_text: fraction > 0.5,
        display: format!("{:.1}%", value),
    }
}
