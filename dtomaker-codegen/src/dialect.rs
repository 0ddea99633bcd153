//! Classification of raw vendor column types into [`DataKind`]s.

use std::sync::LazyLock;

use dtomaker_core::{ColumnInfo, DataKind};
use dtomaker_manifest::Application;
use regex::Regex;

/// Ordered `(pattern, kind)` rules, first match wins.
type KindRules = Vec<(Regex, DataKind)>;

fn rules(entries: &[(&str, DataKind)]) -> KindRules {
    entries
        .iter()
        .map(|(pattern, kind)| {
            let regex = Regex::new(&format!("(?i){}", pattern)).expect("valid kind pattern");
            (regex, *kind)
        })
        .collect()
}

fn first_match(rules: &KindRules, raw_type: &str) -> DataKind {
    rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(raw_type))
        .map(|(_, kind)| *kind)
        .unwrap_or(DataKind::String)
}

static MYSQL_RULES: LazyLock<KindRules> = LazyLock::new(|| {
    rules(&[
        ("int|bit", DataKind::Int),
        ("float", DataKind::Float),
        ("decimal|double", DataKind::Double),
        ("datetime", DataKind::DateTime),
        ("date", DataKind::Date),
        ("time", DataKind::Time),
    ])
});

static ORACLE_RULES: LazyLock<KindRules> = LazyLock::new(|| {
    rules(&[
        ("binary_float", DataKind::Float),
        ("binary_double", DataKind::Double),
        ("date|timestamp", DataKind::DateTime),
    ])
});

static ORACLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)number").expect("valid number pattern"));

/// A source database's raw type vocabulary.
pub trait Dialect {
    /// Dialect name as used in configuration
    fn name(&self) -> &'static str;

    /// Classify a column; unmatched types are [`DataKind::String`].
    fn classify(&self, column: &ColumnInfo) -> DataKind;
}

/// MySQL-style `SHOW COLUMNS` types such as `int(11)` or `varchar(255)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn classify(&self, column: &ColumnInfo) -> DataKind {
        first_match(&MYSQL_RULES, &column.data_type)
    }
}

/// Oracle-style types, where `NUMBER` is refined by precision and scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn classify(&self, column: &ColumnInfo) -> DataKind {
        if ORACLE_NUMBER.is_match(&column.data_type) {
            let precision = column.precision.unwrap_or(0);
            let scale = column.scale.unwrap_or(0);
            return if scale > 0 {
                DataKind::Double
            } else if precision > 10 {
                DataKind::Long
            } else {
                DataKind::Int
            };
        }
        first_match(&ORACLE_RULES, &column.data_type)
    }
}

/// The dialect for a configured database application.
pub fn dialect_for(application: Application) -> Box<dyn Dialect> {
    match application {
        Application::MySql => Box::new(MySqlDialect),
        Application::Oracle => Box::new(OracleDialect),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mysql(raw: &str) -> DataKind {
        MySqlDialect.classify(&ColumnInfo::new("c", raw))
    }

    fn oracle(raw: &str, precision: Option<u32>, scale: Option<u32>) -> DataKind {
        OracleDialect.classify(&ColumnInfo::new("c", raw).numeric(precision, scale))
    }

    #[test]
    fn test_mysql_classify() {
        assert_eq!(mysql("varchar(255)"), DataKind::String);
        assert_eq!(mysql("datetime"), DataKind::DateTime);
        assert_eq!(mysql("decimal(10,2)"), DataKind::Double);
        assert_eq!(mysql("bigint(20) unsigned"), DataKind::Int);
        assert_eq!(mysql("bit(1)"), DataKind::Int);
        assert_eq!(mysql("float"), DataKind::Float);
        assert_eq!(mysql("double"), DataKind::Double);
        assert_eq!(mysql("date"), DataKind::Date);
        assert_eq!(mysql("time"), DataKind::Time);
        assert_eq!(mysql("text"), DataKind::String);
    }

    #[test]
    fn test_mysql_is_case_insensitive() {
        assert_eq!(mysql("INT(11)"), DataKind::Int);
        assert_eq!(mysql("DateTime"), DataKind::DateTime);
    }

    #[test]
    fn test_mysql_first_match_wins() {
        // "timestamp" contains "time" but not "date"
        assert_eq!(mysql("timestamp"), DataKind::Time);
        // "datetime" is checked before "date" and "time"
        assert_eq!(mysql("datetime(6)"), DataKind::DateTime);
    }

    #[test]
    fn test_oracle_number_refinement() {
        assert_eq!(oracle("NUMBER", Some(5), Some(0)), DataKind::Int);
        assert_eq!(oracle("NUMBER", Some(12), Some(0)), DataKind::Long);
        assert_eq!(oracle("NUMBER", Some(10), Some(2)), DataKind::Double);
        assert_eq!(oracle("NUMBER", Some(10), None), DataKind::Int);
        assert_eq!(oracle("NUMBER", None, None), DataKind::Int);
    }

    #[test]
    fn test_oracle_classify() {
        assert_eq!(oracle("BINARY_FLOAT", None, None), DataKind::Float);
        assert_eq!(oracle("BINARY_DOUBLE", None, None), DataKind::Double);
        assert_eq!(oracle("DATE", None, None), DataKind::DateTime);
        assert_eq!(oracle("TIMESTAMP(6)", None, None), DataKind::DateTime);
        assert_eq!(oracle("VARCHAR2", None, None), DataKind::String);
        assert_eq!(oracle("CLOB", None, None), DataKind::String);
    }

    #[test]
    fn test_dialect_for() {
        assert_eq!(dialect_for(Application::MySql).name(), "mysql");
        assert_eq!(dialect_for(Application::Oracle).name(), "oracle");
    }
}
