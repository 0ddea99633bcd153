//! Code generation for dtomaker.
//!
//! This crate turns table metadata into output files.
//!
//! # Module Organization
//!
//! - [`dialect`] - Raw column type classification (MySQL, Oracle)
//! - [`language`] - The [`TypeMapper`] trait and default-value tables
//! - [`mappers`] - Java, PHP and TypeScript type mappers
//! - [`naming`] - Class names derived from table names
//! - [`template`] - Templates with repeatable field and index blocks
//! - [`entity`] - Per-table template rendering
//! - [`sqlite`] - SQLite schema scripts
//! - [`processor`] - Running a whole profile

pub mod dialect;
pub mod entity;
pub mod language;
pub mod mappers;
pub mod naming;
pub mod processor;
pub mod sqlite;
pub mod template;

pub use dialect::{Dialect, MySqlDialect, OracleDialect, dialect_for};
pub use entity::{EntityBuilder, EntityMaker};
pub use language::{DefaultValues, TypeInfo, TypeMapper};
pub use mappers::{JavaTypeMapper, PhpTypeMapper, TypeScriptTypeMapper, mapper_for};
pub use naming::{ClassNameFormatter, Style};
pub use processor::{GenerationReport, Processor, TableFailure};
pub use sqlite::{ConvertRule, Converter, SqliteGenerator};
pub use template::{BlockKind, Template};
