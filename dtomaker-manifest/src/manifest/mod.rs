//! Manifest types and parsing for dtomaker.toml files.

mod database;
mod file;
mod format;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

pub use database::{Application, DatabaseConfig};
pub use file::DtomakerToml;
pub use format::{
    CombineConfig, DefaultValueOverrides, FormatConfig, LineEnding, OutputKind,
};
pub use parse::parse_manifest;
use serde::Deserialize;

/// Placeholder replaced with the directory that holds dtomaker.toml
pub const WORKSPACE_ROOT: &str = "${workspaceRoot}";

/// Root manifest for dtomaker.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generation profiles, processed in order
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// One generation run: where the metadata comes from and what to produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub database: DatabaseConfig,

    pub format: FormatConfig,

    /// Tables to process; empty means every table of the source
    #[serde(default)]
    pub tables: Vec<String>,
}

impl Manifest {
    /// Expand `${workspaceRoot}` in every path setting.
    pub fn expand_workspace_root(&mut self, root: &Path) {
        let root = root.display().to_string();
        let expand = |value: &mut String| *value = value.replace(WORKSPACE_ROOT, &root);

        for profile in &mut self.profiles {
            expand(&mut profile.format.output_path);
            if let Some(template) = profile.format.template_path.as_mut() {
                expand(template);
            }
            if let Some(snapshot) = profile.database.snapshot.as_mut() {
                expand(snapshot);
            }
        }
    }

    /// Profiles whose label matches `label` (all profiles when `None`).
    pub fn select<'a>(&'a self, label: Option<&'a str>) -> impl Iterator<Item = &'a Profile> {
        self.profiles
            .iter()
            .filter(move |p| label.is_none_or(|l| p.label == l))
    }
}

impl Profile {
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.format.output_path)
    }

    pub fn template_path(&self) -> Option<PathBuf> {
        self.format.template_path.as_ref().map(PathBuf::from)
    }

    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.database.snapshot.as_ref().map(PathBuf::from)
    }

    /// One-line summary: `label host@database (type)`
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({})",
            self.label,
            self.database.display_name(),
            self.format.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MANIFEST: &str = r#"
        [[profiles]]
        label = "entities"
        tables = ["user_account"]

        [profiles.database]
        database = "shop"
        snapshot = "${workspaceRoot}/schema.toml"

        [profiles.format]
        type = "dto"
        template_path = "${workspaceRoot}/templates/entity.ts"
        file_extension = "ts"

        [[profiles]]
        label = "lite"

        [profiles.database]
        snapshot = "schema.toml"

        [profiles.format]
        type = "sqlite"
    "#;

    #[test]
    fn test_expand_workspace_root() {
        let mut manifest = Manifest::from_str(MANIFEST).unwrap();
        manifest.expand_workspace_root(Path::new("/work"));

        let profile = &manifest.profiles[0];
        assert_eq!(profile.output_dir(), PathBuf::from("/work/output"));
        assert_eq!(
            profile.template_path(),
            Some(PathBuf::from("/work/templates/entity.ts"))
        );
        assert_eq!(
            profile.snapshot_path(),
            Some(PathBuf::from("/work/schema.toml"))
        );
        assert_eq!(
            manifest.profiles[1].snapshot_path(),
            Some(PathBuf::from("schema.toml"))
        );
    }

    #[test]
    fn test_select_by_label() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        assert_eq!(manifest.select(None).count(), 2);
        let selected: Vec<_> = manifest.select(Some("lite")).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].format.kind, OutputKind::Sqlite);
        assert_eq!(manifest.select(Some("nope")).count(), 0);
    }

    #[test]
    fn test_profile_summary() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        assert_eq!(
            manifest.profiles[0].summary(),
            "entities localhost@shop (dto)"
        );
    }
}
