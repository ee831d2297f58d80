// src/sql/dml.rs
use super::quote_ident;
use crate::model::MigrationPlan;

/// Render the row-copy statement for a compiled plan:
/// `INSERT INTO `target` (cols..) SELECT exprs.. FROM schema.`source``.
///
/// Source expressions are raw SQL by contract and render verbatim; only
/// identifiers this crate owns get quoted.
pub fn insert_select_sql(plan: &MigrationPlan, source_schema: &str) -> String {
    let target_cols: Vec<String> = plan
        .mappings
        .iter()
        .map(|m| quote_ident(&m.target_column))
        .collect();
    let source_exprs: Vec<&str> = plan
        .mappings
        .iter()
        .map(|m| m.source_expression.as_str())
        .collect();

    format!(
        "INSERT INTO {} ({}) SELECT {} FROM {}.{}",
        quote_ident(&plan.target_table),
        target_cols.join(", "),
        source_exprs.join(", "),
        source_schema,
        quote_ident(&plan.source_table)
    )
}

/// Truncate statement, when the plan asks for a wiped target.
pub fn truncate_sql(plan: &MigrationPlan) -> Option<String> {
    plan.truncate_target
        .then(|| format!("TRUNCATE TABLE {}", quote_ident(&plan.target_table)))
}

/// Single-row dry-run: `SELECT expr AS `target`, .. FROM schema.`source`
/// LIMIT 1`, for showing the operator one transformed row before executing.
pub fn preview_sql(plan: &MigrationPlan, source_schema: &str) -> String {
    let selects: Vec<String> = plan
        .mappings
        .iter()
        .map(|m| format!("{} AS {}", m.source_expression, quote_ident(&m.target_column)))
        .collect();

    format!(
        "SELECT {} FROM {}.{} LIMIT 1",
        selects.join(", "),
        source_schema,
        quote_ident(&plan.source_table)
    )
}
