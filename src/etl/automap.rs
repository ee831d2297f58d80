// src/etl/automap.rs
use crate::model::{Column, ColumnMapping};

/// Pre-fill mappings by name matching: a target column whose name also
/// exists on the source side maps 1:1, every other target stays blank.
///
/// Pure and idempotent over `(target_columns, source_columns)` — re-running
/// cannot change an already-computed result. One entry per target column,
/// declaration order preserved.
pub fn auto_map(target_columns: &[Column], source_columns: &[String]) -> Vec<ColumnMapping> {
    target_columns
        .iter()
        .map(|col| {
            let expr = if source_columns.iter().any(|s| s == &col.name) {
                col.name.clone()
            } else {
                String::new()
            };
            ColumnMapping::new(col.name.clone(), expr)
        })
        .collect()
}

/// The editable mapping set for one target table.
///
/// Operator edits survive source-column refreshes; only switching to a
/// different target table resets the draft and re-runs the heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingDraft {
    target_table: String,
    mappings: Vec<ColumnMapping>,
}

impl MappingDraft {
    /// Fresh draft for a target table, pre-filled by [`auto_map`].
    pub fn for_target(
        target_table: impl Into<String>,
        target_columns: &[Column],
        source_columns: &[String],
    ) -> Self {
        Self {
            target_table: target_table.into(),
            mappings: auto_map(target_columns, source_columns),
        }
    }

    pub fn target_table(&self) -> &str {
        &self.target_table
    }

    pub fn mappings(&self) -> &[ColumnMapping] {
        &self.mappings
    }

    /// Current expression for a target column.
    pub fn expression(&self, target_column: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.target_column == target_column)
            .map(|m| m.source_expression.as_str())
    }

    /// Record an operator edit. Returns false when the column is not part
    /// of the target table.
    pub fn set(&mut self, target_column: &str, expression: impl Into<String>) -> bool {
        match self
            .mappings
            .iter_mut()
            .find(|m| m.target_column == target_column)
        {
            Some(mapping) => {
                mapping.source_expression = expression.into();
                true
            }
            None => false,
        }
    }

    /// React to a table selection change. A different target table resets
    /// the draft and re-runs the heuristic; re-selecting the same table
    /// keeps operator edits intact.
    pub fn switch_target(
        &mut self,
        target_table: &str,
        target_columns: &[Column],
        source_columns: &[String],
    ) {
        if self.target_table != target_table {
            *self = Self::for_target(target_table, target_columns, source_columns);
        }
    }
}
