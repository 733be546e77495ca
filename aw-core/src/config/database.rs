use super::{AwConfig, ConfigError};

/// Typed view over the `app.database.*` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub const DEFAULT_URL: &'static str = "sqlite://adventureworks.db";
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

    /// Read the section, falling back to defaults for missing keys.
    ///
    /// A key that is present but cannot be converted is an error rather
    /// than silently replaced by the default.
    pub fn from_config(config: &AwConfig) -> Result<Self, ConfigError> {
        let url = match config.get::<String>("app.database.url") {
            Err(ConfigError::NotFound(_)) => Self::DEFAULT_URL.to_string(),
            other => other?,
        };
        let max_connections = match config.get::<u32>("app.database.connections") {
            Err(ConfigError::NotFound(_)) => Self::DEFAULT_MAX_CONNECTIONS,
            other => other?,
        };
        Ok(Self {
            url,
            max_connections,
        })
    }
}
