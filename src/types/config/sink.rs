use serde::Deserialize;

/// Where transformed documents are written.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SinkConfig {
    /// JSON lines on stdout
    Console,
    Postgres {
        database_url_env_var: String,
        #[serde(default = "default_migrations_dir")]
        migrations_dir: String,
    },
}

fn default_migrations_dir() -> String {
    crate::db::migrations::MIGRATIONS_DIR.to_string()
}

impl SinkConfig {
    /// Env var that must be set for this sink, if any.
    pub fn required_env_var(&self) -> Option<&str> {
        match self {
            SinkConfig::Console => None,
            SinkConfig::Postgres {
                database_url_env_var,
                ..
            } => Some(database_url_env_var),
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig::Console
    }
}
