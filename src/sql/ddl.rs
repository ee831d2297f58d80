// src/sql/ddl.rs
use super::quote_ident;
use crate::model::{Column, ColumnType, Table};

/// MySQL storage type for a catalog column type.
pub fn mysql_type(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Integer => "INT",
        ColumnType::Real => "DOUBLE",
        ColumnType::Text => "VARCHAR(255)",
        ColumnType::Boolean => "TINYINT(1)",
    }
}

/// `CREATE TABLE IF NOT EXISTS` for a catalog table, with a composite
/// primary key clause when any column is marked.
pub fn create_table_sql(table: &Table) -> String {
    let mut defs: Vec<String> = Vec::with_capacity(table.columns.len());
    let mut primary_keys: Vec<String> = Vec::new();

    for col in &table.columns {
        defs.push(format!("{} {}", quote_ident(&col.name), mysql_type(col.column_type)));
        if col.primary_key {
            primary_keys.push(quote_ident(&col.name));
        }
    }

    let mut sql = format!(
        "CREATE TABLE IF NOT EXISTS {} ({}",
        quote_ident(&table.name),
        defs.join(", ")
    );
    if !primary_keys.is_empty() {
        sql.push_str(&format!(", PRIMARY KEY ({})", primary_keys.join(", ")));
    }
    sql.push_str(");");
    sql
}

/// Additive column sync: `ALTER TABLE .. ADD COLUMN ..`. Type changes and
/// drops are left to database tooling.
pub fn add_column_sql(table_name: &str, column: &Column) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN {} {}",
        quote_ident(table_name),
        quote_ident(&column.name),
        mysql_type(column.column_type)
    )
}
