//! Generate command report data structures.

use dtomaker_codegen::GenerationReport;

use super::output::{Output, Report};

/// Outcome of one profile.
#[derive(Debug)]
pub struct ProfileRun {
    /// `label host@database (type)`
    pub summary: String,
    /// Generated files, or why the profile could not run at all
    pub result: eyre::Result<GenerationReport>,
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Files were rendered but not written
    pub dry_run: bool,
    /// Selected profiles, in manifest order
    pub runs: Vec<ProfileRun>,
}

impl GenerateReport {
    /// Whether any profile or table failed.
    pub fn has_failures(&self) -> bool {
        self.runs.iter().any(|run| match &run.result {
            Ok(report) => report.has_failures(),
            Err(_) => true,
        })
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.runs.is_empty() {
            out.warning("no profiles matched");
            return;
        }

        for run in &self.runs {
            out.section(&run.summary);
            match &run.result {
                Ok(report) => render_profile(report, out),
                Err(error) => out.warning(&format!("{:#}", error)),
            }
            out.newline();
        }

        if self.dry_run {
            out.preformatted("Dry run: no files were written");
        }
    }
}

fn render_profile(report: &GenerationReport, out: &mut dyn Output) {
    if report.removed > 0 {
        out.removed_item(&format!("{} existing file(s)", report.removed));
    }

    for file in &report.files {
        if report.dry_run {
            out.divider(&file.path().display().to_string());
            out.preformatted(file.content());
        } else {
            out.added_item(&file.path().display().to_string());
        }
    }

    for failure in &report.failures {
        out.warning(&format!("{}: {:#}", failure.table, failure.error));
    }
}
