//! Shared string utilities for code generation.

use std::sync::LazyLock;

use regex::Regex;

static AUTO_INCREMENT_SEED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(AUTO_INCREMENT)=\d+").expect("valid auto increment pattern"));

/// Characters that cannot appear in file names on common filesystems
const UNSAFE_FILE_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Convert a table name to UpperCamelCase (e.g., "user_account" -> "UserAccount").
///
/// The whole name is lowercased, then split on underscores and whitespace,
/// and the first letter of each word is capitalized. Interior capitals are
/// not kept: `UserAccount` becomes `Useraccount`.
pub fn upper_camelize(source: &str) -> String {
    source
        .to_lowercase()
        .split(|c: char| c == '_' || c.is_whitespace())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Replace characters that are invalid in file names with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_FILE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Reset every `AUTO_INCREMENT=<n>` table option to `AUTO_INCREMENT=1`.
pub fn normalize_auto_increment(create_statement: &str) -> String {
    AUTO_INCREMENT_SEED
        .replace_all(create_statement, "${1}=1")
        .into_owned()
}
