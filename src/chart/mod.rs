//! Series transformation: query results into chart-ready records.
//!
//! The gateway answers a report query with an x-axis vector plus named value
//! series. Each rendering mode needs a different record shape (literal
//! values for line/bar tracks, zero-filled sums for stacks, percentage
//! cells for the matrix); [`to_records`] produces exactly that shape and
//! nothing else — formatting and color policy live beside it so the
//! renderer has no numeric logic of its own.

pub mod format;
pub mod matrix;
pub mod palette;
pub mod transform;

pub use format::{axis_label, bar_label};
pub use matrix::{cell_style, CellStyle, MAX_OPACITY};
pub use palette::{series_color, PALETTE};
pub use transform::{to_records, value_keys, ChartRecord, DEFAULT_SERIES_LABEL};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw query result from the gateway.
///
/// Series lengths are not trusted: an index past the end of a series reads
/// as absent, and absent values coerce to zero only in the modes that sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub x_axis: Vec<Value>,

    #[serde(default)]
    pub series: Vec<Series>,
}

/// One named value series, parallel to the x axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// May be empty or absent; rendering falls back to `"Value"`.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub data: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Value at `i`, treating out-of-range and null alike.
    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied().flatten()
    }
}
