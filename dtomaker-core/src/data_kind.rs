//! Dialect-independent column data kinds.

use std::fmt;

/// Logical kind of a column, shared by every dialect and output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Int,
    Long,
    Float,
    Double,
    DateTime,
    Date,
    Time,
    String,
}

impl DataKind {
    /// All kinds, in declaration order.
    pub const ALL: [DataKind; 8] = [
        DataKind::Int,
        DataKind::Long,
        DataKind::Float,
        DataKind::Double,
        DataKind::DateTime,
        DataKind::Date,
        DataKind::Time,
        DataKind::String,
    ];

    /// Configuration key for the kind (used in `default_values`)
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Int => "int",
            DataKind::Long => "long",
            DataKind::Float => "float",
            DataKind::Double => "double",
            DataKind::DateTime => "datetime",
            DataKind::Date => "date",
            DataKind::Time => "time",
            DataKind::String => "string",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataKind::Int | DataKind::Long | DataKind::Float | DataKind::Double
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, DataKind::DateTime | DataKind::Date | DataKind::Time)
    }

    /// Short naming-convention prefix for the kind.
    pub fn hungarian(&self) -> &'static str {
        match self {
            DataKind::Int | DataKind::Long | DataKind::Float | DataKind::Double => "n",
            DataKind::DateTime => "dt",
            DataKind::Date => "d",
            DataKind::Time => "t",
            DataKind::String => "s",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hungarian() {
        assert_eq!(DataKind::Int.hungarian(), "n");
        assert_eq!(DataKind::Long.hungarian(), "n");
        assert_eq!(DataKind::Double.hungarian(), "n");
        assert_eq!(DataKind::String.hungarian(), "s");
        assert_eq!(DataKind::DateTime.hungarian(), "dt");
        assert_eq!(DataKind::Date.hungarian(), "d");
        assert_eq!(DataKind::Time.hungarian(), "t");
    }

    #[test]
    fn test_partitions() {
        let numeric = DataKind::ALL.iter().filter(|k| k.is_numeric()).count();
        let temporal = DataKind::ALL.iter().filter(|k| k.is_temporal()).count();
        assert_eq!(numeric, 4);
        assert_eq!(temporal, 3);
        assert!(!DataKind::String.is_numeric());
        assert!(!DataKind::String.is_temporal());
    }
}
