//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "dtomaker.toml")
    }
}

impl Manifest {
    /// Parse a dtomaker.toml file from the given path.
    ///
    /// Paths are returned as written; use [`crate::DtomakerToml`] to also
    /// expand `${workspaceRoot}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a dtomaker.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_has_span() {
        let err = parse_manifest("[[profiles]\nlabel = 1", "dtomaker.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_output_type() {
        let err = parse_manifest(
            "[[profiles]]\n[profiles.database]\nsnapshot = \"s.toml\"\n[profiles.format]\ntype = \"yaml\"",
            "dtomaker.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/definitely/not/here/dtomaker.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
