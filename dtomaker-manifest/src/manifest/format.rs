//! Output format settings of a profile.

use std::{fmt, str::FromStr};

use dtomaker_core::DataKind;
use serde::Deserialize;

/// What a profile generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Classes rendered from a template, one per table
    Dto,
    /// Native `CREATE TABLE` statements, one file per table
    Create,
    /// A single SQLite schema script
    Sqlite,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Dto => "dto",
            OutputKind::Create => "create",
            OutputKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dto" => Ok(OutputKind::Dto),
            "create" => Ok(OutputKind::Create),
            "sqlite" => Ok(OutputKind::Sqlite),
            _ => Err(format!(
                "unknown output type '{}', expected 'dto', 'create' or 'sqlite'",
                s
            )),
        }
    }
}

/// Line break style of generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum LineEnding {
    #[default]
    #[serde(rename = "lf", alias = "LF", alias = "\n")]
    Lf,
    #[serde(rename = "crlf", alias = "CRLF", alias = "\r\n")]
    CrLf,
    #[serde(rename = "cr", alias = "CR", alias = "\r")]
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// `combine = { enabled = true, file_name = "..." }`
#[derive(Debug, Clone, Deserialize)]
pub struct CombineConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_combine_file_name")]
    pub file_name: String,
}

fn default_combine_file_name() -> String {
    "noTitle".to_string()
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file_name: default_combine_file_name(),
        }
    }
}

/// Per-kind literals that replace a language's built-in fallback defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DefaultValueOverrides {
    pub int: Option<String>,
    pub long: Option<String>,
    pub float: Option<String>,
    pub double: Option<String>,
    pub datetime: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub string: Option<String>,
}

impl DefaultValueOverrides {
    /// The override configured for `kind`, if any.
    pub fn get(&self, kind: DataKind) -> Option<&str> {
        let value = match kind {
            DataKind::Int => &self.int,
            DataKind::Long => &self.long,
            DataKind::Float => &self.float,
            DataKind::Double => &self.double,
            DataKind::DateTime => &self.datetime,
            DataKind::Date => &self.date,
            DataKind::Time => &self.time,
            DataKind::String => &self.string,
        };
        value.as_deref()
    }
}

/// `[profiles.format]`
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    #[serde(rename = "type")]
    pub kind: OutputKind,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default)]
    pub template_path: Option<String>,

    /// Extension of generated DTO files; also selects the type mapper
    #[serde(default)]
    pub file_extension: String,

    /// Class name format, e.g. `${className}Dto` or `${camelize(ltrim:"tbl_")}`
    #[serde(default)]
    pub class_name: String,

    /// Literal prefix stripped from table names
    #[serde(default)]
    pub ltrim_table_name: String,

    #[serde(default)]
    pub eol: LineEnding,

    /// Delete existing files in the output directory before writing
    #[serde(default)]
    pub output_reset: bool,

    #[serde(default)]
    pub combine: CombineConfig,

    #[serde(default)]
    pub default_values: DefaultValueOverrides,
}

fn default_output_path() -> String {
    "${workspaceRoot}/output".to_string()
}
