use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A dtomaker.toml file together with its parsed, path-expanded manifest.
pub struct DtomakerToml {
    path: PathBuf,
    manifest: Manifest,
}

impl DtomakerToml {
    /// Open and parse a dtomaker.toml file.
    ///
    /// `${workspaceRoot}` expands to the directory containing the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut manifest = Manifest::from_file(&path)?;

        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        manifest.expand_workspace_root(&root);

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_expands_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dtomaker.toml");
        std::fs::write(
            &path,
            r#"
            [[profiles]]
            label = "lite"
            [profiles.database]
            snapshot = "${workspaceRoot}/schema.toml"
            [profiles.format]
            type = "sqlite"
            "#,
        )
        .unwrap();

        let file = DtomakerToml::open(&path).unwrap();
        let profile = &file.manifest().profiles[0];

        assert_eq!(file.path(), path);
        assert_eq!(profile.snapshot_path(), Some(temp.path().join("schema.toml")));
        assert_eq!(profile.output_dir(), temp.path().join("output"));
    }
}
