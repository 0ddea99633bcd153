//! Runs one profile: reads metadata, renders output and writes files.

use std::path::PathBuf;

use dtomaker_core::{File, MetadataSource, clear_dir, ensure_dir, normalize_auto_increment};
use dtomaker_manifest::{OutputKind, Profile};
use eyre::{Context, Report, Result, eyre};
use indexmap::IndexMap;

use crate::{Converter, EntityMaker, SqliteGenerator, Template};

/// A table that could not be generated.
#[derive(Debug)]
pub struct TableFailure {
    pub table: String,
    pub error: Report,
}

/// Outcome of running a profile.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Rendered files, in output order
    pub files: Vec<File>,
    /// Tables skipped because of an error
    pub failures: Vec<TableFailure>,
    /// Files deleted from the output directory by `output_reset`
    pub removed: usize,
    /// Files were rendered but not written
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Paths of the files written to disk (empty for a dry run).
    pub fn written(&self) -> Vec<PathBuf> {
        if self.dry_run {
            return Vec::new();
        }
        self.files.iter().map(|f| f.path().to_path_buf()).collect()
    }
}

/// Generates the output of one profile.
///
/// A failure while reading one table's metadata skips that table and is
/// recorded in the report; configuration problems fail the whole run.
pub struct Processor<'a> {
    profile: &'a Profile,
    dry_run: bool,
}

impl<'a> Processor<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            dry_run: false,
        }
    }

    /// Render without touching the output directory.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Render and, unless this is a dry run, write the profile's files.
    pub fn run(&self, source: &dyn MetadataSource) -> Result<GenerationReport> {
        let mut report = self.render(source)?;
        report.dry_run = self.dry_run;
        if self.dry_run {
            return Ok(report);
        }

        let output_dir = self.profile.output_dir();
        ensure_dir(&output_dir)?;
        if self.profile.format.output_reset {
            report.removed = clear_dir(&output_dir)?;
            tracing::debug!(
                dir = %output_dir.display(),
                removed = report.removed,
                "cleared output directory"
            );
        }

        for file in &report.files {
            file.write()?;
            tracing::info!(path = %file.path().display(), "wrote file");
        }
        Ok(report)
    }

    /// Render the profile's files without writing them.
    pub fn render(&self, source: &dyn MetadataSource) -> Result<GenerationReport> {
        let tables = self.tables(source)?;
        tracing::debug!(
            profile = %self.profile.label,
            kind = %self.profile.format.kind,
            tables = tables.len(),
            "rendering profile"
        );

        let mut report = GenerationReport::default();
        match self.profile.format.kind {
            OutputKind::Dto => self.render_entities(source, &tables, &mut report)?,
            OutputKind::Create => self.render_create_statements(source, &tables, &mut report),
            OutputKind::Sqlite => self.render_sqlite(source, &tables, &mut report)?,
        }
        Ok(report)
    }

    /// Configured table list, or every table of the source.
    fn tables(&self, source: &dyn MetadataSource) -> Result<Vec<String>> {
        if self.profile.tables.is_empty() {
            source.list_tables().wrap_err("failed to list tables")
        } else {
            Ok(self.profile.tables.clone())
        }
    }

    fn output_file(&self, name: &str, extension: &str, content: String) -> File {
        File::in_dir(&self.profile.output_dir(), name, extension).with_content(content)
    }

    fn render_entities(
        &self,
        source: &dyn MetadataSource,
        tables: &[String],
        report: &mut GenerationReport,
    ) -> Result<()> {
        let format = &self.profile.format;
        let template_path = self
            .profile
            .template_path()
            .ok_or_else(|| eyre!("profile '{}' has no template_path", self.profile.label))?;
        let template_source = std::fs::read_to_string(&template_path)
            .wrap_err_with(|| format!("failed to read template '{}'", template_path.display()))?;
        let maker = EntityMaker::new(
            Template::parse(&template_source),
            format,
            self.profile.database.application,
        )?;

        // file name -> concatenated content, in first-seen order
        let mut contents: IndexMap<String, String> = IndexMap::new();
        for table in tables {
            match render_entity(&maker, source, table, self.profile) {
                Ok((class_name, content)) => {
                    let name = if format.combine.enabled {
                        format.combine.file_name.clone()
                    } else {
                        class_name
                    };
                    contents.entry(name).or_default().push_str(&content);
                }
                Err(error) => record_failure(report, table, error),
            }
        }

        report.files = contents
            .into_iter()
            .map(|(name, content)| self.output_file(&name, &format.file_extension, content))
            .collect();
        Ok(())
    }

    fn render_create_statements(
        &self,
        source: &dyn MetadataSource,
        tables: &[String],
        report: &mut GenerationReport,
    ) {
        for table in tables {
            tracing::debug!(table = %table, "reading create statement");
            match source.create_statement(table) {
                Ok(sql) => {
                    let file = self.output_file(table, "sql", normalize_auto_increment(&sql));
                    report.files.push(file);
                }
                Err(error) => record_failure(report, table, error),
            }
        }
    }

    fn render_sqlite(
        &self,
        source: &dyn MetadataSource,
        tables: &[String],
        report: &mut GenerationReport,
    ) -> Result<()> {
        let converter = Converter::sqlite()?;
        let mut generator = SqliteGenerator::new(&converter);
        for table in tables {
            tracing::debug!(table = %table, "reading columns");
            match source.table_columns(table) {
                Ok(columns) => generator.add_table(table.as_str(), columns),
                Err(error) => record_failure(report, table, error),
            }
        }

        let file_name = &self.profile.format.combine.file_name;
        report
            .files
            .push(self.output_file(file_name, "sql", generator.build()));
        Ok(())
    }
}

fn render_entity(
    maker: &EntityMaker,
    source: &dyn MetadataSource,
    table: &str,
    profile: &Profile,
) -> Result<(String, String)> {
    tracing::debug!(table = %table, "rendering entity");
    let info = source.table_info(table)?;
    let columns = source.table_columns(table)?;
    let indexes = source.table_indexes(table)?;

    let mut builder = maker.builder(&info);
    for column in &columns {
        builder.add_field(column);
    }
    for index in &indexes {
        builder.add_index(index);
    }

    let class_name = builder.class_name().to_string();
    Ok((class_name, builder.generate_content(Some(profile.format.eol))))
}

fn record_failure(report: &mut GenerationReport, table: &str, error: Report) {
    tracing::warn!(table = %table, error = %error, "skipping table");
    report.failures.push(TableFailure {
        table: table.to_string(),
        error,
    });
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use dtomaker_core::{ColumnInfo, KeyRole, Snapshot, SnapshotTable, TableInfo};
    use dtomaker_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot::default()
            .table(
                SnapshotTable::new(TableInfo::new("user_account"))
                    .column(ColumnInfo::new("id", "int(11)").key(KeyRole::Primary).extra("auto_increment"))
                    .create_statement("CREATE TABLE `user_account` (`id` int) AUTO_INCREMENT=42"),
            )
            .table(
                SnapshotTable::new(TableInfo::new("order_item"))
                    .column(ColumnInfo::new("qty", "smallint(6)")),
            )
    }

    fn profile(root: &std::path::Path, format: &str) -> Profile {
        let content = format!(
            "[[profiles]]\nlabel = \"t\"\n[profiles.database]\nsnapshot = \"s.toml\"\n[profiles.format]\n{}",
            format
        );
        let mut manifest = Manifest::from_str(&content).unwrap();
        manifest.expand_workspace_root(root);
        manifest.profiles.remove(0)
    }

    #[test]
    fn test_create_statements() {
        let temp = TempDir::new().unwrap();
        let profile = profile(temp.path(), "type = \"create\"");

        let report = Processor::new(&profile).run(&snapshot()).unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].table, "order_item");
        let written = std::fs::read_to_string(temp.path().join("output/user_account.sql")).unwrap();
        assert!(written.ends_with("AUTO_INCREMENT=1"));
    }

    #[test]
    fn test_sqlite_uses_combine_file_name() {
        let temp = TempDir::new().unwrap();
        let profile = profile(
            temp.path(),
            "type = \"sqlite\"\ncombine = { file_name = \"schema\" }",
        );

        let report = Processor::new(&profile).run(&snapshot()).unwrap();

        assert!(!report.has_failures());
        assert_eq!(report.written(), [temp.path().join("output/schema.sql")]);
        let script = report.files[0].content();
        assert!(script.contains("\"user_account\""));
        assert!(script.contains("  \"qty\" INTEGER NOT NULL"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let profile = profile(temp.path(), "type = \"sqlite\"");

        let report = Processor::new(&profile).dry_run(true).run(&snapshot()).unwrap();

        assert_eq!(report.files.len(), 1);
        assert!(report.written().is_empty());
        assert!(!temp.path().join("output").exists());
    }

    #[test]
    fn test_configured_tables_override_source_list() {
        let temp = TempDir::new().unwrap();
        let mut profile = profile(temp.path(), "type = \"create\"");
        profile.tables = vec!["user_account".to_string(), "missing".to_string()];

        let report = Processor::new(&profile).dry_run(true).run(&snapshot()).unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.failures[0].table, "missing");
        assert!(report.failures[0].error.to_string().contains("not found"));
    }

    #[test]
    fn test_missing_template_fails_profile() {
        let temp = TempDir::new().unwrap();
        let profile = profile(
            temp.path(),
            "type = \"dto\"\ntemplate_path = \"${workspaceRoot}/nope.ts\"\nfile_extension = \"ts\"",
        );

        let err = Processor::new(&profile).run(&snapshot()).unwrap_err();
        assert!(err.to_string().contains("failed to read template"));
    }
}
