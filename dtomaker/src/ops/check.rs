//! Check operation - validates what a generate run would need.

use std::{collections::HashSet, path::Path};

use dtomaker_codegen::{ClassNameFormatter, Template, mapper_for};
use dtomaker_core::{MetadataSource, Snapshot};
use dtomaker_manifest::{Manifest, OutputKind, Profile};

use crate::reports::{CheckReport, ProfileCheck, TemplateInfo};

/// Execute the check operation.
///
/// Opens every profile's snapshot and template without generating anything.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        profiles: manifest.profiles.iter().map(check_profile).collect(),
    }
}

fn check_profile(profile: &Profile) -> ProfileCheck {
    let mut check = ProfileCheck {
        summary: profile.summary(),
        table_count: 0,
        template: None,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    match profile.snapshot_path().map(Snapshot::open) {
        Some(Ok(snapshot)) => check_tables(profile, &snapshot, &mut check),
        Some(Err(error)) => check.errors.push(format!("{:#}", error)),
        None => check.errors.push("no snapshot configured".to_string()),
    }

    if let Err(error) =
        ClassNameFormatter::new(&profile.format.class_name, &profile.format.ltrim_table_name)
    {
        check.errors.push(format!("{:#}", error));
    }

    if profile.format.kind == OutputKind::Dto {
        check_template(profile, &mut check);
    }
    check
}

fn check_tables(profile: &Profile, snapshot: &Snapshot, check: &mut ProfileCheck) {
    let available = match snapshot.list_tables() {
        Ok(tables) => tables,
        Err(error) => {
            check.errors.push(format!("{:#}", error));
            return;
        }
    };

    if profile.tables.is_empty() {
        check.table_count = available.len();
        return;
    }

    let known: HashSet<&str> = available.iter().map(String::as_str).collect();
    for table in &profile.tables {
        if !known.contains(table.as_str()) {
            check
                .warnings
                .push(format!("table '{}' is not in the snapshot", table));
        }
    }
    check.table_count = profile.tables.len();
}

fn check_template(profile: &Profile, check: &mut ProfileCheck) {
    if mapper_for(&profile.format.file_extension, &profile.format.default_values).is_none() {
        check.warnings.push(format!(
            "no type mapping for '.{}' files; language placeholders render empty",
            profile.format.file_extension
        ));
    }

    let Some(path) = profile.template_path() else {
        check.errors.push("no template configured".to_string());
        return;
    };
    match std::fs::read_to_string(&path) {
        Ok(source) => {
            let template = Template::parse(&source);
            check.template = Some(TemplateInfo {
                path,
                field_blocks: template.field_blocks().len(),
                index_blocks: template.index_blocks().len(),
            });
        }
        Err(error) => check.errors.push(format!(
            "failed to read template '{}': {}",
            path.display(),
            error
        )),
    }
}
