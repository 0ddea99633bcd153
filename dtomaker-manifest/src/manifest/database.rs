//! Database connection settings of a profile.

use std::fmt;

use serde::Deserialize;

/// Database product the metadata comes from.
///
/// Unknown names fall back to MySQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Application {
    #[default]
    MySql,
    Oracle,
}

impl Application {
    pub fn as_str(&self) -> &'static str {
        match self {
            Application::MySql => "mysql",
            Application::Oracle => "oracle",
        }
    }
}

impl From<String> for Application {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "oracle" => Application::Oracle,
            _ => Application::MySql,
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[profiles.database]`
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub application: Application,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub database: String,

    /// Metadata snapshot file (TOML or JSON)
    #[serde(default)]
    pub snapshot: Option<String>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            application: Application::default(),
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: String::new(),
            snapshot: None,
        }
    }
}

impl DatabaseConfig {
    /// `host@database`, used when listing profiles
    pub fn display_name(&self) -> String {
        format!("{}@{}", self.host, self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_from_string() {
        assert_eq!(Application::from("oracle".to_string()), Application::Oracle);
        assert_eq!(Application::from("Oracle".to_string()), Application::Oracle);
        assert_eq!(Application::from("mysql".to_string()), Application::MySql);
        assert_eq!(Application::from("mariadb".to_string()), Application::MySql);
    }

    #[test]
    fn test_database_defaults() {
        let db: DatabaseConfig = toml::from_str("database = \"shop\"").unwrap();

        assert_eq!(db.application, Application::MySql);
        assert_eq!(db.host, "localhost");
        assert_eq!(db.port, 3306);
        assert_eq!(db.user, "root");
        assert!(db.snapshot.is_none());
        assert_eq!(db.display_name(), "localhost@shop");
    }

    #[test]
    fn test_database_oracle() {
        let db: DatabaseConfig =
            toml::from_str("application = \"oracle\"\nport = 1521\nsnapshot = \"s.json\"")
                .unwrap();

        assert_eq!(db.application, Application::Oracle);
        assert_eq!(db.port, 1521);
        assert_eq!(db.snapshot.as_deref(), Some("s.json"));
    }
}
