use dtomaker_core::DataKind;
use dtomaker_manifest::DefaultValueOverrides;
use indexmap::IndexMap;

/// Per-kind fallback literals used when a column declares no default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultValues {
    values: IndexMap<DataKind, String>,
}

impl DefaultValues {
    /// Build a table from `(kind, literal)` pairs. Kinds left out fall back
    /// to the generic built-ins.
    pub fn new(entries: &[(DataKind, &str)]) -> Self {
        let mut values: IndexMap<DataKind, String> = DataKind::ALL
            .iter()
            .map(|kind| (*kind, generic_default(*kind).to_string()))
            .collect();
        for (kind, literal) in entries {
            values.insert(*kind, literal.to_string());
        }
        Self { values }
    }

    /// Replace built-ins with caller-configured literals.
    pub fn with_overrides(mut self, overrides: &DefaultValueOverrides) -> Self {
        for kind in DataKind::ALL {
            if let Some(literal) = overrides.get(kind) {
                self.values.insert(kind, literal.to_string());
            }
        }
        self
    }

    pub fn get(&self, kind: DataKind) -> &str {
        self.values
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| generic_default(kind))
    }
}

impl Default for DefaultValues {
    fn default() -> Self {
        Self::new(&[])
    }
}

fn generic_default(kind: DataKind) -> &'static str {
    match kind {
        DataKind::Int | DataKind::Long => "0",
        DataKind::Float | DataKind::Double => "0.0",
        DataKind::DateTime => "'0000-00-00 00:00:00'",
        DataKind::Date => "'0000-00-00'",
        DataKind::Time => "'00:00:00'",
        DataKind::String => "''",
    }
}
