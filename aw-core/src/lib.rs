pub mod config;
pub mod logging;

pub use config::{AwConfig, ConfigError, ConfigValue, DatabaseSettings, FromConfigValue};
pub use logging::init_tracing;
