//! Output-language type mapping.

use dtomaker_core::{ColumnInfo, DataKind};

use super::DefaultValues;

/// Rendered type information for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Language type label, e.g. `Integer` or `Date|null`
    pub label: String,
    /// Naming-convention prefix, e.g. `n` or `dt`
    pub hungarian: &'static str,
    /// Default-value literal in the target language
    pub default_value: String,
}

/// Trait for mapping column kinds to language-specific type labels and
/// default literals.
///
/// Implement this trait for each target language.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Fallback defaults for columns without a declared default
    fn defaults(&self) -> &DefaultValues;

    /// Type label for a non-nullable column of `kind`
    fn label(&self, kind: DataKind) -> &'static str;

    /// Type label for a nullable column of `kind`
    fn nullable_label(&self, kind: DataKind) -> String {
        format!("{}|null", self.label(kind))
    }

    /// The language's null literal
    fn null_token(&self) -> &'static str {
        "null"
    }

    /// Quote character for string literals
    fn quote(&self) -> char {
        '\''
    }

    /// Label for `column`, honouring its nullability.
    fn render_label(&self, column: &ColumnInfo, kind: DataKind) -> String {
        if column.nullable {
            self.nullable_label(kind)
        } else {
            self.label(kind).to_string()
        }
    }

    /// Default literal for `column`.
    ///
    /// Declared defaults are kept as-is for numeric kinds and quoted for
    /// strings. Temporal defaults always render as the null token. Without a
    /// declared default, nullable columns get the null token and others the
    /// configured fallback.
    fn render_default(&self, column: &ColumnInfo, kind: DataKind) -> String {
        match &column.default {
            Some(value) if kind.is_numeric() => value.clone(),
            Some(_) if kind.is_temporal() => self.null_token().to_string(),
            Some(value) => {
                let quote = self.quote();
                format!("{quote}{value}{quote}")
            }
            None if column.nullable => self.null_token().to_string(),
            None => self.defaults().get(kind).to_string(),
        }
    }

    /// Label, hungarian tag and default for `column`.
    fn resolve(&self, column: &ColumnInfo, kind: DataKind) -> TypeInfo {
        TypeInfo {
            label: self.render_label(column, kind),
            hungarian: kind.hungarian(),
            default_value: self.render_default(column, kind),
        }
    }
}
