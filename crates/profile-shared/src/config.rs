//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub users: UserSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Used for `Location` and paging links when the request carries no `Host` header.
    pub public_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserSettings {
    pub default_first_name: String,
    pub default_last_name: String,
    pub seed_admin: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// `json` or `pretty`
    pub format: String,
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("PROFILE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Configuration made of the built-in defaults only.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 5000)?
            .set_default("app.name", "profile-server")?
            .set_default("app.public_url", "http://localhost:5000")?
            .set_default("users.default_first_name", DEFAULT_FIRST_NAME)?
            .set_default("users.default_last_name", DEFAULT_LAST_NAME)?
            .set_default("users.seed_admin", true)?
            .set_default("log.format", "json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::defaults().unwrap();
        assert_eq!(config.app.port, 5000);
        assert_eq!(config.app.public_url, "http://localhost:5000");
        assert_eq!(config.users.default_first_name, "John");
        assert_eq!(config.users.default_last_name, "Doe");
        assert!(config.users.seed_admin);
        assert_eq!(config.log.format, "json");
        assert!(config.log.directory.is_none());
    }
}
