// src/sql/query.rs
use std::collections::BTreeMap;

use serde_json::Value;

use super::quote_ident;
use crate::model::ReportSpec;

/// Time bucket applied when the grouping column is a bare date/time column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Day,
    Month,
    Year,
}

impl Granularity {
    /// Wire name used by the gateway request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }

    fn date_format(&self) -> &'static str {
        match self {
            Granularity::Year => "%Y",
            Granularity::Month => "%Y-%m",
            Granularity::Day => "%Y-%m-%d",
        }
    }
}

/// A rendered report query: SQL text with `?` placeholders plus the bound
/// filter values in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl ReportQuery {
    /// Build the warehouse query for a report plus the active filter values.
    ///
    /// Shape: `SELECT <group> AS x_result, <measure> FROM <src> [joins]
    /// [WHERE ...] GROUP BY x_result ORDER BY x_result`. Filter columns are
    /// qualified with the source table so joins stay unambiguous; null,
    /// empty-string, and empty-list filter values are skipped; list values
    /// become `IN` clauses.
    pub fn build(
        report: &ReportSpec,
        filters: &BTreeMap<String, Value>,
        granularity: Granularity,
    ) -> Self {
        let group_expr = group_expression(&report.group_by, granularity);

        let mut sql = format!(
            "SELECT {} AS x_result, {} FROM {}",
            group_expr,
            report.measure_formula,
            quote_ident(&report.source_table)
        );

        for join in &report.joins {
            sql.push_str(&format!(
                " {} JOIN {} ON {}",
                join.join_type.keyword(),
                quote_ident(&join.table),
                join.on_expression
            ));
        }

        let mut clauses: Vec<String> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        for (column, value) in filters {
            let qualified = format!(
                "{}.{}",
                quote_ident(&report.source_table),
                quote_ident(column)
            );
            match value {
                Value::Null => {}
                Value::String(s) if s.is_empty() => {}
                Value::Array(items) => {
                    if items.is_empty() {
                        continue;
                    }
                    let placeholders = vec!["?"; items.len()].join(", ");
                    clauses.push(format!("{} IN ({})", qualified, placeholders));
                    params.extend(items.iter().cloned());
                }
                other => {
                    clauses.push(format!("{} = ?", qualified));
                    params.push(other.clone());
                }
            }
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        sql.push_str(" GROUP BY x_result ORDER BY x_result");

        Self { sql, params }
    }
}

/// Wrap a bare time/date grouping column in `DATE_FORMAT` for the requested
/// granularity. A group-by that already carries an expression (contains a
/// parenthesis) is used as configured.
fn group_expression(group_by: &str, granularity: Granularity) -> String {
    let lower = group_by.to_ascii_lowercase();
    let is_temporal = lower.contains("time") || lower.contains("date");
    if is_temporal && !group_by.contains('(') {
        format!("DATE_FORMAT({}, '{}')", group_by, granularity.date_format())
    } else {
        group_by.to_string()
    }
}
