// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! dtomaker.toml configuration: generation profiles, their database and
//! output settings, and validation with source-annotated diagnostics.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Application, CombineConfig, DatabaseConfig, DefaultValueOverrides, DtomakerToml,
    FormatConfig, LineEnding, Manifest, OutputKind, Profile, WORKSPACE_ROOT, parse_manifest,
};
