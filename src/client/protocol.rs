//! Wire shapes for the backend API.
//!
//! These mirror the JSON contracts of the schema, reports, query, and ETL
//! endpoints; see the handlers on the service side for the authoritative
//! field set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::ReportSpec;

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub report_id: String,

    /// Active slice values; omitted slices mean "all".
    pub filters: BTreeMap<String, Value>,

    /// Time bucket for date/time group-by columns; the gateway defaults to
    /// day when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
}

/// `GET /reports` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsResponse {
    #[serde(default)]
    pub reports: Vec<ReportSpec>,
}

/// `GET /filter-values/{table}/{column}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterValuesResponse {
    #[serde(default)]
    pub values: Vec<Value>,
}

/// `GET /osaio/tables` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceTablesResponse {
    #[serde(default)]
    pub tables: Vec<String>,
}

/// `GET /osaio/columns/{table}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceColumnsResponse {
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Success envelope of `POST /etl/execute` and the report mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error envelope of every non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: String,
}
