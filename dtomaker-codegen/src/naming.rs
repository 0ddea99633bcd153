//! Class names derived from table names.

use std::sync::LazyLock;

use dtomaker_core::upper_camelize;
use eyre::{Context, Result};
use regex::Regex;

/// Placeholder for the computed name in a plain format string.
pub const CLASS_NAME_PLACEHOLDER: &str = "${className}";

/// Characters replaced by a space before camelizing
const SEPARATOR_CHARS: [char; 11] = ['.', '"', '/', '\\', '[', ']', ':', ';', '|', '=', ','];

static OPTION_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*)\)").expect("valid option group pattern"));

static TRIM_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[^lr])trim:"([^"]*)""#).expect("valid trim option pattern")
});

static LTRIM_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"ltrim:"([^"]*)""#).expect("valid ltrim option pattern"));

static RTRIM_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"rtrim:"([^"]*)""#).expect("valid rtrim option pattern"));

static STYLED_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*)\$\{(plain|camelize)(?:\(.*\))?\}(.*)$")
        .expect("valid class name format pattern")
});

/// How the trimmed name is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Keep the name as trimmed
    Plain,
    /// Convert to UpperCamelCase
    Camelize,
}

#[derive(Debug, Clone)]
enum Layout {
    /// No recognised placeholder: the camelized name alone
    Bare,
    /// `prefix${className}suffix`
    Template { prefix: String, suffix: String },
    /// `prefix${plain(...)}suffix` or `prefix${camelize(...)}suffix`
    Styled {
        style: Style,
        prefix: String,
        suffix: String,
    },
}

/// Converts table names to class names.
///
/// Supported format strings:
///
/// - `""` → `user_account` becomes `UserAccount`
/// - `"${className}Dto"` → `UserAccountDto`
/// - `"${camelize(ltrim:\"tbl_\")}Entity"` → `tbl_user` becomes `UserEntity`
/// - `"${plain(rtrim:\"_v[0-9]+\")}"` → `orders_v2` becomes `orders`
///
/// Trim options inside the parentheses are regular expressions; `ltrim` is
/// anchored at the start, `rtrim` at the end and `trim` matches anywhere.
#[derive(Debug, Clone)]
pub struct ClassNameFormatter {
    ltrim_table_name: Option<Regex>,
    trim: Option<Regex>,
    ltrim: Option<Regex>,
    rtrim: Option<Regex>,
    layout: Layout,
}

impl ClassNameFormatter {
    /// Parse a class name format and the table-name prefix to strip.
    ///
    /// Fails when a trim pattern is not a valid regular expression.
    pub fn new(format: &str, ltrim_table_name: &str) -> Result<Self> {
        let ltrim_table_name = anchored(ltrim_table_name, "^", "")
            .wrap_err_with(|| format!("invalid ltrim_table_name '{}'", ltrim_table_name))?;

        let (mut trim, mut ltrim, mut rtrim) = (None, None, None);
        if let Some(group) = OPTION_GROUP.captures(format).and_then(|c| c.get(1)) {
            let options = group.as_str();
            trim = option(&TRIM_OPTION, options, "", "")?;
            ltrim = option(&LTRIM_OPTION, options, "^", "")?;
            rtrim = option(&RTRIM_OPTION, options, "", "$")?;
        }

        let layout = if let Some(caps) = STYLED_FORMAT.captures(format) {
            let style = if caps[2].eq_ignore_ascii_case("camelize") {
                Style::Camelize
            } else {
                Style::Plain
            };
            Layout::Styled {
                style,
                prefix: caps[1].to_string(),
                suffix: caps[3].to_string(),
            }
        } else if let Some((prefix, suffix)) = format.split_once(CLASS_NAME_PLACEHOLDER) {
            Layout::Template {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }
        } else {
            Layout::Bare
        };

        Ok(Self {
            ltrim_table_name,
            trim,
            ltrim,
            rtrim,
            layout,
        })
    }

    /// Style applied to the trimmed name.
    pub fn style(&self) -> Style {
        match &self.layout {
            Layout::Styled { style, .. } => *style,
            _ => Style::Camelize,
        }
    }

    /// Derive the class name for `table_name`.
    pub fn format(&self, table_name: &str) -> String {
        let mut name = table_name.to_string();
        for pattern in [&self.ltrim_table_name, &self.trim, &self.rtrim, &self.ltrim]
            .into_iter()
            .flatten()
        {
            name = pattern.replace(&name, "").into_owned();
        }

        let name: String = name
            .chars()
            .map(|c| if SEPARATOR_CHARS.contains(&c) { ' ' } else { c })
            .collect();
        let name = match self.style() {
            Style::Camelize => upper_camelize(&name),
            Style::Plain => name,
        };

        match &self.layout {
            Layout::Bare => name,
            Layout::Template { prefix, suffix } | Layout::Styled { prefix, suffix, .. } => {
                format!("{}{}{}", prefix, name, suffix)
            }
        }
    }
}

fn anchored(pattern: &str, start: &str, end: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    let regex = Regex::new(&format!("{}(?:{}){}", start, pattern, end))?;
    Ok(Some(regex))
}

fn option(option: &Regex, options: &str, start: &str, end: &str) -> Result<Option<Regex>> {
    match option.captures(options).and_then(|c| c.get(1)) {
        Some(pattern) => anchored(pattern.as_str(), start, end)
            .wrap_err_with(|| format!("invalid trim pattern '{}'", pattern.as_str())),
        None => Ok(None),
    }
}
