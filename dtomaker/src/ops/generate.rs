//! Generate operation - runs the selected profiles.

use dtomaker_codegen::{GenerationReport, Processor};
use dtomaker_core::Snapshot;
use dtomaker_manifest::{Manifest, OutputKind, Profile};
use eyre::{Result, eyre};

use crate::reports::{GenerateReport, ProfileRun};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Only profiles of this output type
    pub kind: Option<OutputKind>,
    /// Only the profile with this label
    pub label: Option<&'a str>,
    /// Render without writing files
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every selected profile runs even if an earlier one fails; failures are
/// collected in the report.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> GenerateReport {
    let profiles = manifest
        .select(opts.label)
        .filter(|profile| opts.kind.is_none_or(|kind| profile.format.kind == kind));

    let mut runs = Vec::new();
    for profile in profiles {
        let result = run_profile(profile, opts.dry_run);
        if let Err(error) = &result {
            tracing::warn!(profile = %profile.label, error = %error, "profile failed");
        }
        runs.push(ProfileRun {
            summary: profile.summary(),
            result,
        });
    }

    GenerateReport {
        dry_run: opts.dry_run,
        runs,
    }
}

fn run_profile(profile: &Profile, dry_run: bool) -> Result<GenerationReport> {
    let snapshot_path = profile
        .snapshot_path()
        .ok_or_else(|| eyre!("profile '{}' has no snapshot", profile.label))?;
    let snapshot = Snapshot::open(&snapshot_path)?;

    Processor::new(profile).dry_run(dry_run).run(&snapshot)
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use tempfile::TempDir;

    use super::*;

    const SNAPSHOT: &str = r#"
        [[tables]]
        name = "tag"
        create_statement = "CREATE TABLE tag (id int) AUTO_INCREMENT=9"

        [[tables.columns]]
        field = "id"
        type = "int"
    "#;

    fn manifest(root: &std::path::Path) -> Manifest {
        let mut manifest = Manifest::from_str(
            r#"
            [[profiles]]
            label = "sql"
            [profiles.database]
            snapshot = "${workspaceRoot}/schema.toml"
            [profiles.format]
            type = "create"

            [[profiles]]
            label = "lite"
            [profiles.database]
            snapshot = "${workspaceRoot}/schema.toml"
            [profiles.format]
            type = "sqlite"

            [[profiles]]
            label = "broken"
            [profiles.database]
            snapshot = "${workspaceRoot}/missing.toml"
            [profiles.format]
            type = "sqlite"
            "#,
        )
        .unwrap();
        manifest.expand_workspace_root(root);
        manifest
    }

    #[test]
    fn test_generate_all_profiles() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("schema.toml"), SNAPSHOT).unwrap();

        let report = generate(
            &manifest(temp.path()),
            GenerateOptions {
                kind: None,
                label: None,
                dry_run: false,
            },
        );

        assert_eq!(report.runs.len(), 3);
        assert!(report.runs[0].result.is_ok());
        assert!(report.runs[1].result.is_ok());
        assert!(report.runs[2].result.is_err());
        assert!(report.has_failures());
        assert!(temp.path().join("output/tag.sql").exists());
        assert!(temp.path().join("output/noTitle.sql").exists());
    }

    #[test]
    fn test_generate_filters() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("schema.toml"), SNAPSHOT).unwrap();
        let manifest = manifest(temp.path());

        let by_kind = generate(
            &manifest,
            GenerateOptions {
                kind: Some(OutputKind::Create),
                label: None,
                dry_run: true,
            },
        );
        assert_eq!(by_kind.runs.len(), 1);
        assert!(!by_kind.has_failures());

        let by_label = generate(
            &manifest,
            GenerateOptions {
                kind: None,
                label: Some("lite"),
                dry_run: true,
            },
        );
        assert_eq!(by_label.runs.len(), 1);
        assert!(by_label.runs[0].summary.starts_with("lite "));
        assert!(!temp.path().join("output").exists());
    }
}
