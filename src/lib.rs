//! # Strata
//!
//! A BI reporting core: chart-series shaping, report query construction,
//! and warehouse ETL mapping compilation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Catalog + ReportSpec (model, validation)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sql::query]
//! ┌─────────────────────────────────────────────────────────┐
//! │            Warehouse query (gateway executes)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [client] → QueryResult
//! ┌─────────────────────────────────────────────────────────┐
//! │       chart::to_records (line / bar / stack / matrix)    │
//! └─────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────┐
//! │   Catalog columns + operator mappings → etl::compile     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [client] → Migration Executor
//! ```
//!
//! The gateway and the executor are external services; everything in this
//! crate is a pure, synchronous function over its inputs except the
//! [`client`] round-trips. Each transformation is recomputed from scratch
//! per query result — no state crosses requests.

pub mod chart;
pub mod client;
pub mod config;
pub mod etl;
pub mod model;
pub mod sql;
pub mod validation;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::chart::{
        axis_label, bar_label, cell_style, series_color, to_records, value_keys, CellStyle,
        ChartRecord, QueryResult, Series,
    };
    pub use crate::client::{ApiClient, ClientError};
    pub use crate::etl::{auto_map, classify, compile, EtlError, ExprKind, MappingDraft};
    pub use crate::model::{
        Category, ChartType, Column, ColumnMapping, ColumnType, Join, JoinType, MigrationPlan,
        ReportSpec, Schema, Table,
    };
    pub use crate::sql::{Granularity, ReportQuery};
}
