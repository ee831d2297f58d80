//! ETL mapping compilation.
//!
//! An operator maps each target-table column to a free-text source
//! expression; this module pre-fills those mappings by name matching,
//! classifies expressions for UI affordance, and compiles the edited set
//! into an executable [`crate::model::MigrationPlan`]. Compilation is pure
//! shaping and validation — nothing runs until the plan is submitted to
//! the executor.

pub mod automap;
pub mod compile;

pub use automap::{auto_map, MappingDraft};
pub use compile::{classify, compile, ExprKind, SyntheticFn};

use thiserror::Error;

/// Result type for ETL compilation.
pub type EtlResult<T> = Result<T, EtlError>;

/// Errors raised while compiling a migration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EtlError {
    /// Every mapping was blank; a migration that copies nothing must never
    /// reach the executor.
    #[error("no columns mapped")]
    NoMappings,
}
