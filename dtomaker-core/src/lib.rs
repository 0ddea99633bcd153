//! Core metadata types and utilities for dtomaker.
//!
//! This crate provides the table/column/index model read from a database,
//! the [`MetadataSource`] abstraction over where that model comes from, and
//! small string and file helpers shared by the generators.

mod data_kind;
mod file;
mod metadata;
mod types;
mod utils;

pub use data_kind::DataKind;
// File operations
pub use file::{File, clear_dir, ensure_dir};
pub use metadata::{MetadataSource, Snapshot, SnapshotTable};
pub use types::{ColumnInfo, IndexInfo, KeyRole, TableInfo};
// String utilities
pub use utils::{normalize_auto_increment, sanitize_file_name, upper_camelize};
