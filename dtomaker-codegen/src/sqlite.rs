//! SQLite schema scripts generated from column metadata.

use dtomaker_core::ColumnInfo;
use eyre::Result;
use indexmap::IndexMap;
use regex::Regex;

/// A `(pattern, replacement)` pair.
#[derive(Debug, Clone)]
pub struct ConvertRule {
    pattern: Regex,
    value: String,
}

impl ConvertRule {
    pub fn new(pattern: &str, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            value: value.into(),
        })
    }
}

/// Ordered rule lists translating MySQL column attributes into another
/// dialect's words. First match wins in every category.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    types: Vec<ConvertRule>,
    extras: Vec<ConvertRule>,
    nulls: Vec<ConvertRule>,
    keys: Vec<ConvertRule>,
    fallback_type: String,
}

impl Converter {
    /// An empty converter; unmatched types become `fallback_type`.
    pub fn new(fallback_type: impl Into<String>) -> Self {
        Self {
            fallback_type: fallback_type.into(),
            ..Self::default()
        }
    }

    /// MySQL → SQLite rules.
    pub fn sqlite() -> Result<Self> {
        Ok(Self::new("TEXT")
            .types([
                ConvertRule::new("(?i)bigint", "INTEGER")?,
                ConvertRule::new("(?i)int", "INTEGER")?,
                ConvertRule::new("(?i)tinyint", "INTEGER")?,
                ConvertRule::new("(?i)smallint", "INTEGER")?,
                ConvertRule::new("(?i)mediumint", "INTEGER")?,
                ConvertRule::new("(?i)varchar", "TEXT")?,
                ConvertRule::new("(?i)character", "TEXT")?,
            ])
            .extras([ConvertRule::new("(?i)auto_increment", " PRIMARY KEY AUTOINCREMENT")?])
            .nulls([
                ConvertRule::new("YES", "")?,
                ConvertRule::new("NO", " NOT NULL")?,
            ])
            .keys([
                ConvertRule::new("PRI", " PRIMARY KEY")?,
                ConvertRule::new("UNI", " UNIQUE")?,
            ]))
    }

    pub fn types(mut self, rules: impl IntoIterator<Item = ConvertRule>) -> Self {
        self.types.extend(rules);
        self
    }

    pub fn extras(mut self, rules: impl IntoIterator<Item = ConvertRule>) -> Self {
        self.extras.extend(rules);
        self
    }

    pub fn nulls(mut self, rules: impl IntoIterator<Item = ConvertRule>) -> Self {
        self.nulls.extend(rules);
        self
    }

    pub fn keys(mut self, rules: impl IntoIterator<Item = ConvertRule>) -> Self {
        self.keys.extend(rules);
        self
    }

    pub fn convert_type(&self, raw_type: &str) -> &str {
        find(&self.types, raw_type).unwrap_or(&self.fallback_type)
    }

    pub fn convert_extra(&self, extra: &str) -> &str {
        find(&self.extras, extra).unwrap_or("")
    }

    pub fn convert_null(&self, null_flag: &str) -> &str {
        find(&self.nulls, null_flag).unwrap_or("")
    }

    pub fn convert_key(&self, key: &str) -> &str {
        find(&self.keys, key).unwrap_or("")
    }
}

fn find<'a>(rules: &'a [ConvertRule], input: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(input))
        .map(|rule| rule.value.as_str())
}

/// Collects tables and renders them as one transactional SQLite script.
pub struct SqliteGenerator<'a> {
    converter: &'a Converter,
    tables: IndexMap<String, Vec<ColumnInfo>>,
}

impl<'a> SqliteGenerator<'a> {
    pub fn new(converter: &'a Converter) -> Self {
        Self {
            converter,
            tables: IndexMap::new(),
        }
    }

    /// Add or replace a table. Tables render in first-insertion order.
    pub fn add_table(&mut self, name: impl Into<String>, columns: Vec<ColumnInfo>) {
        self.tables.insert(name.into(), columns);
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Render the script.
    pub fn build(&self) -> String {
        let mut lines = vec!["BEGIN TRANSACTION;".to_string()];
        for (table, columns) in &self.tables {
            lines.push(format!("CREATE TABLE IF NOT EXISTS \"{}\" (", table));
            let fields: Vec<String> = columns.iter().map(|c| self.column_line(c)).collect();
            if !fields.is_empty() {
                lines.push(fields.join(",\n"));
            }
            lines.push(");".to_string());
            lines.push(String::new());
        }
        lines.push("COMMIT;".to_string());
        lines.join("\n")
    }

    fn column_line(&self, column: &ColumnInfo) -> String {
        let type_word = self.converter.convert_type(&column.data_type);
        let null_word = self.converter.convert_null(column.null_flag());
        // Composite keys are not expressible per column, so the key clause
        // stays empty.
        let key_word = "";
        let extra_word = self.converter.convert_extra(&column.extra);
        format!(
            "  \"{}\" {}{}{}{}",
            column.field, type_word, null_word, key_word, extra_word
        )
    }
}
