//! Table metadata read from a database dialect.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a column within the table's keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum KeyRole {
    #[default]
    #[serde(rename = "", alias = "none")]
    None,
    #[serde(rename = "PRI", alias = "primary")]
    Primary,
    #[serde(rename = "UNI", alias = "unique")]
    Unique,
    /// Non-unique index (MySQL `MUL`).
    #[serde(rename = "MUL", alias = "multiple")]
    Multiple,
}

impl KeyRole {
    /// The MySQL `SHOW COLUMNS` spelling of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRole::None => "",
            KeyRole::Primary => "PRI",
            KeyRole::Unique => "UNI",
            KeyRole::Multiple => "MUL",
        }
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic information about a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableInfo {
    pub name: String,
    /// Storage engine label (empty for dialects without one)
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub comment: String,
}

impl TableInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// A single column of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnInfo {
    pub field: String,
    /// Raw vendor type, e.g. `varchar(255)` or `NUMBER`
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub key: KeyRole,
    #[serde(default)]
    pub default: Option<String>,
    /// Extra attributes such as `auto_increment`
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub comment: String,
    /// Declared numeric precision (Oracle `DATA_PRECISION`)
    #[serde(default)]
    pub precision: Option<u32>,
    /// Declared numeric scale (Oracle `DATA_SCALE`)
    #[serde(default)]
    pub scale: Option<u32>,
}

impl ColumnInfo {
    pub fn new(field: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            data_type: data_type.into(),
            ..Self::default()
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn key(mut self, key: KeyRole) -> Self {
        self.key = key;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn numeric(mut self, precision: Option<u32>, scale: Option<u32>) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    pub fn is_primary(&self) -> bool {
        self.key == KeyRole::Primary
    }

    /// Nullability as rendered in `SHOW COLUMNS` output.
    pub fn null_flag(&self) -> &'static str {
        yes_no(self.nullable)
    }
}

/// One column entry of a table index.
///
/// Composite keys yield one entry per column, sharing `key_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexInfo {
    pub key_name: String,
    /// 1-based position of the column within the key
    #[serde(default = "first_position")]
    pub seq_in_index: u32,
    pub column_name: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub unique: bool,
}

fn first_position() -> u32 {
    1
}

impl IndexInfo {
    pub fn new(key_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            seq_in_index: 1,
            column_name: column_name.into(),
            nullable: false,
            unique: false,
        }
    }

    pub fn position(mut self, seq_in_index: u32) -> Self {
        self.seq_in_index = seq_in_index;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "NO" }
}
