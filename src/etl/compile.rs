// src/etl/compile.rs
use super::{EtlError, EtlResult};
use crate::model::{ColumnMapping, MigrationPlan};

/// Synthetic function tokens the executor resolves server-side.
///
/// The compiler only recognizes them so the UI can label the affordance;
/// it never evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticFn {
    Uuid,
    Now,
    Null,
}

impl SyntheticFn {
    /// Parse one of the recognized literal tokens. Matching is exact; the
    /// closed set is the whole point.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "UUID()" => Some(SyntheticFn::Uuid),
            "NOW()" => Some(SyntheticFn::Now),
            "NULL" => Some(SyntheticFn::Null),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SyntheticFn::Uuid => "UUID()",
            SyntheticFn::Now => "NOW()",
            SyntheticFn::Null => "NULL",
        }
    }
}

/// Classification of one source expression, for UI affordance only — the
/// compiled plan carries the expression verbatim either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// Empty or whitespace; the column is simply not migrated.
    Blank,
    /// Bare identifier naming a known source column.
    ColumnRef(String),
    /// One of the recognized synthetic tokens.
    Synthetic(SyntheticFn),
    /// Anything else, passed through as raw SQL trusted on the target
    /// engine.
    SqlFragment(String),
}

/// Classify a source expression against the known source columns.
pub fn classify(expression: &str, source_columns: &[String]) -> ExprKind {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return ExprKind::Blank;
    }
    if let Some(synthetic) = SyntheticFn::parse(trimmed) {
        return ExprKind::Synthetic(synthetic);
    }
    if is_bare_identifier(trimmed) && source_columns.iter().any(|c| c == trimmed) {
        return ExprKind::ColumnRef(trimmed.to_string());
    }
    ExprKind::SqlFragment(trimmed.to_string())
}

fn is_bare_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Compile an edited mapping set into an executable plan.
///
/// Blank mappings drop out (not an error — "not migrated"), the remainder
/// keeps target-column declaration order, and an all-blank set is refused
/// before any network call with [`EtlError::NoMappings`].
pub fn compile(
    source_table: impl Into<String>,
    target_table: impl Into<String>,
    mappings: &[ColumnMapping],
    truncate_target: bool,
) -> EtlResult<MigrationPlan> {
    let active: Vec<ColumnMapping> = mappings
        .iter()
        .filter(|m| !m.is_blank())
        .cloned()
        .collect();

    if active.is_empty() {
        return Err(EtlError::NoMappings);
    }

    Ok(MigrationPlan {
        source_table: source_table.into(),
        target_table: target_table.into(),
        mappings: active,
        truncate_target,
    })
}
