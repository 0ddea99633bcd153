//! TypeScript type mapper implementation.

use dtomaker_core::{ColumnInfo, DataKind};
use dtomaker_manifest::DefaultValueOverrides;

use crate::{DefaultValues, TypeMapper};

/// TypeScript type mapper.
///
/// Temporal kinds are always labelled `Date|null`, whatever the column's
/// own nullability.
pub struct TypeScriptTypeMapper {
    defaults: DefaultValues,
}

impl TypeScriptTypeMapper {
    pub fn new(overrides: &DefaultValueOverrides) -> Self {
        let defaults = DefaultValues::new(&[
            (DataKind::DateTime, "null"),
            (DataKind::Date, "null"),
            (DataKind::Time, "null"),
        ]);
        Self {
            defaults: defaults.with_overrides(overrides),
        }
    }
}

impl Default for TypeScriptTypeMapper {
    fn default() -> Self {
        Self::new(&DefaultValueOverrides::default())
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn defaults(&self) -> &DefaultValues {
        &self.defaults
    }

    fn label(&self, kind: DataKind) -> &'static str {
        match kind {
            DataKind::Int | DataKind::Long | DataKind::Float | DataKind::Double => "number",
            DataKind::DateTime | DataKind::Date | DataKind::Time => "Date",
            DataKind::String => "string",
        }
    }

    fn render_label(&self, column: &ColumnInfo, kind: DataKind) -> String {
        if column.nullable || kind.is_temporal() {
            self.nullable_label(kind)
        } else {
            self.label(kind).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use dtomaker_core::KeyRole;

    use super::*;

    #[test]
    fn test_typescript_user_account() {
        let mapper = TypeScriptTypeMapper::default();
        let id = ColumnInfo::new("id", "int(11)").key(KeyRole::Primary);
        let created = ColumnInfo::new("created_at", "datetime").nullable(true);

        let id_info = mapper.resolve(&id, DataKind::Int);
        assert_eq!(id_info.label, "number");
        assert_eq!(id_info.default_value, "0");
        assert_eq!(id_info.hungarian, "n");

        let created_info = mapper.resolve(&created, DataKind::DateTime);
        assert_eq!(created_info.label, "Date|null");
        assert_eq!(created_info.default_value, "null");
        assert_eq!(created_info.hungarian, "dt");
    }

    #[test]
    fn test_typescript_temporal_always_nullable_label() {
        let mapper = TypeScriptTypeMapper::default();
        let day = ColumnInfo::new("day", "date");
        assert_eq!(mapper.render_label(&day, DataKind::Date), "Date|null");
        assert_eq!(mapper.render_default(&day, DataKind::Date), "null");
    }

    #[test]
    fn test_typescript_strings() {
        let mapper = TypeScriptTypeMapper::default();
        let name = ColumnInfo::new("name", "varchar(20)");
        let memo = ColumnInfo::new("memo", "text").nullable(true);

        assert_eq!(mapper.render_label(&name, DataKind::String), "string");
        assert_eq!(mapper.render_default(&name, DataKind::String), "''");
        assert_eq!(mapper.render_label(&memo, DataKind::String), "string|null");
        assert_eq!(mapper.render_default(&memo, DataKind::String), "null");
    }

    #[test]
    fn test_typescript_declared_temporal_default() {
        let mapper = TypeScriptTypeMapper::default();
        let updated = ColumnInfo::new("updated_at", "timestamp").default_value("CURRENT_TIMESTAMP");
        assert_eq!(mapper.render_default(&updated, DataKind::Time), "null");
    }
}
