// src/model/report.rs
use serde::{Deserialize, Serialize};

/// Dashboard category a report is grouped under.
///
/// Reports with no category land in `Finance` rather than carrying a free
/// string around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Finance,
    User,
    Device,
}

/// Rendering mode for a report's result series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Matrix,
}

/// How a joined table attaches to the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    #[default]
    Left,
    Inner,
}

impl JoinType {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinType::Left => "LEFT",
            JoinType::Inner => "INNER",
        }
    }
}

/// One join in a report's query.
///
/// `on_expression` is raw SQL, trusted by the gateway; no well-formedness
/// check happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub table: String,

    #[serde(default)]
    pub join_type: JoinType,

    pub on_expression: String,
}

/// Declarative description of one report.
///
/// Produced by the editor, persisted by the backend keyed by `id` (an edit
/// is a full replace), and consumed by the query gateway and the series
/// transformer. Unknown fields in stored JSON are ignored, missing ones
/// default, so old configs keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSpec {
    pub id: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub source_table: String,

    #[serde(default)]
    pub joins: Vec<Join>,

    /// Grouping column on the source table (the x axis).
    pub group_by: String,

    /// Aggregation expression, e.g. `SUM(amount)`.
    pub measure_formula: String,

    #[serde(default)]
    pub chart_type: ChartType,

    /// Columns offered as filter dropdowns.
    #[serde(default)]
    pub slices: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
