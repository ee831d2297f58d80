//! Warehouse catalog, report, and migration shapes.
//!
//! Every type here mirrors a JSON contract of the external services; serde
//! defaults are deliberate so that sparse or stale stored configs keep
//! deserializing instead of propagating untyped maps.

pub mod mapping;
pub mod report;
pub mod table;

pub use mapping::{ColumnMapping, MigrationPlan};
pub use report::{Category, ChartType, Join, JoinType, ReportSpec};
pub use table::{Column, ColumnType, Schema, Table};
