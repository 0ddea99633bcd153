//! Sources of table metadata.

use std::path::Path;

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

use crate::{ColumnInfo, IndexInfo, TableInfo};

/// Read access to the tables of a database.
///
/// Errors are reported per call so a caller can skip a failing table and
/// continue with the rest.
pub trait MetadataSource {
    /// Names of all tables, in the source's natural order
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Table-level information
    fn table_info(&self, table: &str) -> Result<TableInfo>;

    /// Columns of a table, in declaration order
    fn table_columns(&self, table: &str) -> Result<Vec<ColumnInfo>>;

    /// Index entries of a table
    fn table_indexes(&self, table: &str) -> Result<Vec<IndexInfo>>;

    /// Native `CREATE TABLE` statement
    fn create_statement(&self, table: &str) -> Result<String>;
}

/// One table captured in a [`Snapshot`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnapshotTable {
    #[serde(flatten)]
    pub info: TableInfo,
    #[serde(default)]
    pub create_statement: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default)]
    pub indexes: Vec<IndexInfo>,
}

/// Offline dump of table metadata, loaded from TOML or JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tables: Vec<SnapshotTable>,
}

impl Snapshot {
    /// Load a snapshot file. Files ending in `.json` are read as JSON, all
    /// others as TOML.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read snapshot '{}'", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let snapshot = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        };

        let snapshot =
            snapshot.wrap_err_with(|| format!("invalid snapshot '{}'", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            tables = snapshot.tables.len(),
            "loaded metadata snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).wrap_err("failed to parse snapshot TOML")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).wrap_err("failed to parse snapshot JSON")
    }

    /// Add a table (builder style, mainly for tests and tooling)
    pub fn table(mut self, table: SnapshotTable) -> Self {
        self.tables.push(table);
        self
    }

    fn find(&self, table: &str) -> Result<&SnapshotTable> {
        self.tables
            .iter()
            .find(|t| t.info.name == table)
            .ok_or_else(|| eyre!("table '{}' not found in snapshot", table))
    }
}

impl SnapshotTable {
    pub fn new(info: TableInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    pub fn column(mut self, column: ColumnInfo) -> Self {
        self.columns.push(column);
        self
    }

    pub fn index(mut self, index: IndexInfo) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn create_statement(mut self, sql: impl Into<String>) -> Self {
        self.create_statement = Some(sql.into());
        self
    }
}

impl MetadataSource for Snapshot {
    fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.info.name.clone()).collect())
    }

    fn table_info(&self, table: &str) -> Result<TableInfo> {
        Ok(self.find(table)?.info.clone())
    }

    fn table_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        Ok(self.find(table)?.columns.clone())
    }

    fn table_indexes(&self, table: &str) -> Result<Vec<IndexInfo>> {
        Ok(self.find(table)?.indexes.clone())
    }

    fn create_statement(&self, table: &str) -> Result<String> {
        self.find(table)?
            .create_statement
            .clone()
            .ok_or_else(|| eyre!("no create statement recorded for table '{}'", table))
    }
}
