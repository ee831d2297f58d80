// src/model/table.rs
use serde::{Deserialize, Serialize};

/// Storage type of a warehouse column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Integer,
    #[default]
    Text,
    Real,
    Boolean,
}

/// A column in a warehouse table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,

    #[serde(rename = "type", default)]
    pub column_type: ColumnType,

    #[serde(default)]
    pub primary_key: bool,

    /// `table.column` reference, when this column points into a dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Column {
    /// Plain column with defaults for everything but name and type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
            foreign_key: None,
            description: None,
        }
    }
}

/// A warehouse table: ordered columns under a unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,

    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

/// The warehouse catalog: dimension tables and fact tables.
///
/// Read-only from this crate's point of view; the schema endpoint owns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub dimensions: Vec<Table>,

    #[serde(default)]
    pub facts: Vec<Table>,
}

impl Schema {
    /// Look up a table by name across both categories.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.dimensions
            .iter()
            .chain(self.facts.iter())
            .find(|t| t.name == name)
    }

    /// All table names, dimensions first.
    pub fn table_names(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .chain(self.facts.iter())
            .map(|t| t.name.clone())
            .collect()
    }
}
