use aw_core::ConfigError;
use aw_data::DataError;

#[derive(Debug)]
pub enum ConsoleError {
    Config(ConfigError),
    Connect(sqlx::Error),
    Data(DataError),
    /// No description has the requested id.
    Missing(i32),
    Json(serde_json::Error),
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Config(e) => write!(f, "{e}"),
            ConsoleError::Connect(e) => write!(f, "Cannot open database: {e}"),
            ConsoleError::Data(e) => write!(f, "{e}"),
            ConsoleError::Missing(id) => write!(f, "No product description with id {id}"),
            ConsoleError::Json(e) => write!(f, "Cannot render JSON: {e}"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Config(e) => Some(e),
            ConsoleError::Connect(e) => Some(e),
            ConsoleError::Data(e) => Some(e),
            ConsoleError::Json(e) => Some(e),
            ConsoleError::Missing(_) => None,
        }
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(err: ConfigError) -> Self {
        ConsoleError::Config(err)
    }
}

impl From<DataError> for ConsoleError {
    fn from(err: DataError) -> Self {
        ConsoleError::Data(err)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Json(err)
    }
}
