//! Java type mapper implementation.

use dtomaker_core::DataKind;
use dtomaker_manifest::DefaultValueOverrides;

use crate::{DefaultValues, TypeMapper};

/// Java type mapper: primitives for non-nullable columns, boxed types for
/// nullable ones.
pub struct JavaTypeMapper {
    defaults: DefaultValues,
}

impl JavaTypeMapper {
    pub fn new(overrides: &DefaultValueOverrides) -> Self {
        let defaults = DefaultValues::new(&[
            (DataKind::Float, "0f"),
            (DataKind::Double, "0f"),
            (DataKind::DateTime, "null"),
            (DataKind::Date, "null"),
            (DataKind::Time, "null"),
            (DataKind::String, "\"\""),
        ]);
        Self {
            defaults: defaults.with_overrides(overrides),
        }
    }
}

impl Default for JavaTypeMapper {
    fn default() -> Self {
        Self::new(&DefaultValueOverrides::default())
    }
}

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn defaults(&self) -> &DefaultValues {
        &self.defaults
    }

    fn label(&self, kind: DataKind) -> &'static str {
        match kind {
            DataKind::Int => "int",
            DataKind::Long => "long",
            DataKind::Float => "float",
            DataKind::Double => "double",
            DataKind::String => "String",
            DataKind::DateTime | DataKind::Date | DataKind::Time => "LocalDateTime",
        }
    }

    fn nullable_label(&self, kind: DataKind) -> String {
        let label = match kind {
            DataKind::Int => "Integer",
            DataKind::Long => "Long",
            DataKind::Float => "Float",
            DataKind::Double => "Double",
            other => self.label(other),
        };
        label.to_string()
    }

    fn quote(&self) -> char {
        '"'
    }
}

#[cfg(test)]
mod tests {
    use dtomaker_core::ColumnInfo;

    use super::*;

    #[test]
    fn test_java_labels() {
        let mapper = JavaTypeMapper::default();
        let id = ColumnInfo::new("id", "int(11)");
        let score = ColumnInfo::new("score", "int(11)").nullable(true);

        assert_eq!(mapper.render_label(&id, DataKind::Int), "int");
        assert_eq!(mapper.render_label(&score, DataKind::Int), "Integer");
        assert_eq!(mapper.render_label(&score, DataKind::Long), "Long");
        assert_eq!(mapper.render_label(&score, DataKind::String), "String");
        assert_eq!(mapper.render_label(&id, DataKind::Date), "LocalDateTime");
    }

    #[test]
    fn test_java_defaults() {
        let mapper = JavaTypeMapper::default();
        let name = ColumnInfo::new("name", "varchar(20)");
        let ratio = ColumnInfo::new("ratio", "double");
        let created = ColumnInfo::new("created", "datetime");
        let title = ColumnInfo::new("title", "varchar(20)").default_value("untitled");

        assert_eq!(mapper.render_default(&name, DataKind::String), "\"\"");
        assert_eq!(mapper.render_default(&ratio, DataKind::Double), "0f");
        assert_eq!(mapper.render_default(&created, DataKind::DateTime), "null");
        assert_eq!(mapper.render_default(&title, DataKind::String), "\"untitled\"");
    }

    #[test]
    fn test_java_nullable_string_is_null() {
        let mapper = JavaTypeMapper::default();
        let note = ColumnInfo::new("note", "text").nullable(true);
        assert_eq!(mapper.render_default(&note, DataKind::String), "null");
    }
}
