//! PHP type mapper implementation.

use dtomaker_core::DataKind;
use dtomaker_manifest::DefaultValueOverrides;

use crate::{DefaultValues, TypeMapper};

/// PHP type mapper.
pub struct PhpTypeMapper {
    defaults: DefaultValues,
}

impl PhpTypeMapper {
    pub fn new(overrides: &DefaultValueOverrides) -> Self {
        Self {
            defaults: DefaultValues::default().with_overrides(overrides),
        }
    }
}

impl Default for PhpTypeMapper {
    fn default() -> Self {
        Self::new(&DefaultValueOverrides::default())
    }
}

impl TypeMapper for PhpTypeMapper {
    fn language(&self) -> &'static str {
        "php"
    }

    fn defaults(&self) -> &DefaultValues {
        &self.defaults
    }

    fn label(&self, kind: DataKind) -> &'static str {
        match kind {
            DataKind::Int | DataKind::Long => "int",
            DataKind::Float => "float",
            DataKind::Double => "double",
            DataKind::DateTime => "datetime",
            DataKind::Date => "date",
            DataKind::Time => "time",
            DataKind::String => "string",
        }
    }
}
