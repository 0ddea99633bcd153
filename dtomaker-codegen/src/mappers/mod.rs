//! Language-specific type mappers.

mod java;
mod php;
mod typescript;

use dtomaker_manifest::DefaultValueOverrides;
pub use java::JavaTypeMapper;
pub use php::PhpTypeMapper;
pub use typescript::TypeScriptTypeMapper;

use crate::TypeMapper;

/// The type mapper for an output file extension (`java`, `php` or `ts`).
///
/// Returns `None` for other extensions; type placeholders then render empty.
pub fn mapper_for(
    extension: &str,
    overrides: &DefaultValueOverrides,
) -> Option<Box<dyn TypeMapper>> {
    match extension.trim_start_matches('.').to_lowercase().as_str() {
        "java" => Some(Box::new(JavaTypeMapper::new(overrides))),
        "php" => Some(Box::new(PhpTypeMapper::new(overrides))),
        "ts" => Some(Box::new(TypeScriptTypeMapper::new(overrides))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapper_for() {
        let overrides = DefaultValueOverrides::default();
        assert_eq!(mapper_for("java", &overrides).unwrap().language(), "java");
        assert_eq!(mapper_for("PHP", &overrides).unwrap().language(), "php");
        assert_eq!(mapper_for(".ts", &overrides).unwrap().language(), "typescript");
        assert!(mapper_for("cs", &overrides).is_none());
        assert!(mapper_for("", &overrides).is_none());
    }
}
