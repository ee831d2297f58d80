//! Validation of report specs against the warehouse catalog.
//!
//! Runs at the editor boundary, before a spec is persisted or queried;
//! collects every problem instead of stopping at the first.

use crate::model::{ReportSpec, Schema};

/// Validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Report references a table the catalog does not have.
    UnknownTable { report: String, table: String },
    /// Report references a column its source table does not have.
    UnknownColumn {
        report: String,
        table: String,
        column: String,
        role: &'static str,
    },
    /// Two reports share an id; the persisted set is keyed by id.
    DuplicateReportId { id: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnknownTable { report, table } => {
                write!(f, "Report '{}' references unknown table '{}'", report, table)
            }
            ValidationError::UnknownColumn {
                report,
                table,
                column,
                role,
            } => {
                write!(
                    f,
                    "Report '{}' uses unknown {} column '{}' on table '{}'",
                    report, role, column, table
                )
            }
            ValidationError::DuplicateReportId { id } => {
                write!(f, "Duplicate report id: '{}'", id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate one report spec against the catalog.
pub fn validate_report(report: &ReportSpec, schema: &Schema) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let source = match schema.table(&report.source_table) {
        Some(table) => Some(table),
        None => {
            errors.push(ValidationError::UnknownTable {
                report: report.id.clone(),
                table: report.source_table.clone(),
            });
            None
        }
    };

    if let Some(table) = source {
        // group_by may be a SQL expression over the column; only bare
        // column names are checked.
        if !report.group_by.contains('(') && !table.has_column(&report.group_by) {
            errors.push(ValidationError::UnknownColumn {
                report: report.id.clone(),
                table: table.name.clone(),
                column: report.group_by.clone(),
                role: "group_by",
            });
        }

        for slice in &report.slices {
            if !table.has_column(slice) {
                errors.push(ValidationError::UnknownColumn {
                    report: report.id.clone(),
                    table: table.name.clone(),
                    column: slice.clone(),
                    role: "slice",
                });
            }
        }
    }

    for join in &report.joins {
        if schema.table(&join.table).is_none() {
            errors.push(ValidationError::UnknownTable {
                report: report.id.clone(),
                table: join.table.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a set of reports: per-report checks plus id uniqueness.
pub fn validate_reports(reports: &[ReportSpec], schema: &Schema) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = std::collections::HashSet::new();
    for report in reports {
        if !seen.insert(&report.id) {
            errors.push(ValidationError::DuplicateReportId {
                id: report.id.clone(),
            });
        }
        if let Err(mut report_errors) = validate_report(report, schema) {
            errors.append(&mut report_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
