//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Blocks found in a profile's template.
#[derive(Debug)]
pub struct TemplateInfo {
    pub path: PathBuf,
    pub field_blocks: usize,
    pub index_blocks: usize,
}

/// Check result for one profile.
#[derive(Debug)]
pub struct ProfileCheck {
    /// `label host@database (type)`
    pub summary: String,
    /// Tables a generate run would process
    pub table_count: usize,
    /// Parsed template (dto profiles only)
    pub template: Option<TemplateInfo>,
    /// Problems that make the profile fail
    pub errors: Vec<String>,
    /// Problems that degrade the output
    pub warnings: Vec<String>,
}

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// One entry per profile, in manifest order.
    pub profiles: Vec<ProfileCheck>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.profiles.iter().all(|p| p.errors.is_empty())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for profile in &self.profiles {
            out.section(&profile.summary);
            out.key_value_indented("tables", &profile.table_count.to_string());
            if let Some(template) = &profile.template {
                out.key_value_indented(
                    "template",
                    &format!(
                        "{} ({} field block(s), {} index block(s))",
                        template.path.display(),
                        template.field_blocks,
                        template.index_blocks
                    ),
                );
            }
            for error in &profile.errors {
                out.list_item(&format!("error: {}", error));
            }
            for warning in &profile.warnings {
                out.warning(warning);
            }
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        }
    }
}
