// src/model/mapping.rs
use serde::{Deserialize, Serialize};

/// One target-column-to-source-expression association in a migration.
///
/// `source_expression` may be a bare source column name, a literal, a raw
/// SQL fragment, or one of the synthetic function tokens; see
/// [`crate::etl::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub target_column: String,
    pub source_expression: String,
}

impl ColumnMapping {
    pub fn new(target_column: impl Into<String>, source_expression: impl Into<String>) -> Self {
        Self {
            target_column: target_column.into(),
            source_expression: source_expression.into(),
        }
    }

    /// Blank expressions mean "not migrated" and are dropped at compile time.
    pub fn is_blank(&self) -> bool {
        self.source_expression.trim().is_empty()
    }
}

/// A validated, executable migration request.
///
/// Built fresh per execution by [`crate::etl::compile`]; never persisted.
/// The executor performs the actual row copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationPlan {
    pub source_table: String,
    pub target_table: String,
    pub mappings: Vec<ColumnMapping>,

    /// Wipe the target before copying. Defaults to false: append-only is
    /// the safe default, data loss must be asked for explicitly.
    #[serde(default)]
    pub truncate_target: bool,
}
