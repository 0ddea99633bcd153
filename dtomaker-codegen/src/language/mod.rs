//! Language-specific abstractions.
//!
//! - [`TypeMapper`] - Trait for mapping column kinds to language types
//! - [`TypeInfo`] - Rendered label, hungarian tag and default of a column
//! - [`DefaultValues`] - Per-kind fallback default literals

mod defaults;
mod traits;

pub use defaults::DefaultValues;
pub use traits::{TypeInfo, TypeMapper};
