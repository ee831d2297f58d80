//! SQL text construction for the warehouse (MySQL flavor).
//!
//! The gateway and the executor run these statements; this crate only
//! renders them, for submission payloads and for dry-run preview.

pub mod ddl;
pub mod dml;
pub mod query;

pub use ddl::{add_column_sql, create_table_sql, mysql_type};
pub use dml::{insert_select_sql, preview_sql, truncate_sql};
pub use query::{Granularity, ReportQuery};

/// Backtick-quote an identifier.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Identifiers accepted from outside callers: ASCII alphanumerics and
/// underscores only, non-empty.
pub fn is_safe_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
