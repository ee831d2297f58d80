// src/chart/transform.rs
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::{QueryResult, Series};
use crate::model::ChartType;

/// Label used when a series arrives unnamed.
pub const DEFAULT_SERIES_LABEL: &str = "Value";

/// Key carrying the per-index stack sum in stacked-bar records.
pub const TOTAL_KEY: &str = "Total";

/// One record per x-axis position, in the shape the renderer binds to:
/// `{ "name": <axis>, ["Total": n,] "<series>": n|null, ... }`.
///
/// Series keys keep declaration order, which is also the visual stack
/// order (first series at the base).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    /// Axis label for this position.
    pub name: Value,

    /// Stack sum; present only in stacked-bar mode. The top-of-bar label
    /// shows this aggregate, not any individual series.
    pub total: Option<f64>,

    /// `(series label, value)` pairs in series declaration order. `None`
    /// survives only in modes that do not sum.
    pub values: Vec<(String, Option<f64>)>,
}

impl ChartRecord {
    /// Value under a series label, if that series exists in this record.
    pub fn value(&self, label: &str) -> Option<Option<f64>> {
        self.values
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| *v)
    }
}

impl Serialize for ChartRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.total.is_some()) + self.values.len();
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("name", &self.name)?;
        if let Some(total) = self.total {
            map.serialize_entry(TOTAL_KEY, &total)?;
        }
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn series_label(series: &Series) -> String {
    if series.name.is_empty() {
        DEFAULT_SERIES_LABEL.to_string()
    } else {
        series.name.clone()
    }
}

/// Shape a query result for one rendering mode.
///
/// An empty x axis yields an empty Vec — the "no data" state, not an error.
///
/// Line mode, and bar mode with a single series, preserve values literally:
/// a null the source sent stays null. Stacked bars (bar with two or more
/// series) and the matrix must sum, so absent values coerce to zero there;
/// stacked records additionally carry the per-index `Total`.
pub fn to_records(result: &QueryResult, chart_type: ChartType) -> Vec<ChartRecord> {
    if result.x_axis.is_empty() {
        return Vec::new();
    }

    let stacked = chart_type == ChartType::Bar && result.series.len() > 1;
    let zero_fill = stacked || chart_type == ChartType::Matrix;

    result
        .x_axis
        .iter()
        .enumerate()
        .map(|(i, x)| {
            let mut values = Vec::with_capacity(result.series.len());
            let mut total = 0.0;
            for series in &result.series {
                let raw = series.value_at(i);
                total += raw.unwrap_or(0.0);
                let value = if zero_fill {
                    Some(raw.unwrap_or(0.0))
                } else {
                    raw
                };
                values.push((series_label(series), value));
            }
            ChartRecord {
                name: x.clone(),
                total: stacked.then_some(total),
                values,
            }
        })
        .collect()
}

/// Matrix column headers: the ordered union of series keys across all
/// records, minus the record's own `name`/`Total` fields. A cell absent
/// from some record renders as zero.
pub fn value_keys(records: &[ChartRecord]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for record in records {
        for (key, _) in &record.values {
            if key == "name" || key == TOTAL_KEY {
                continue;
            }
            if !keys.iter().any(|k| k == key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}
