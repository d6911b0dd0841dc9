use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbAssayError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Logging error: {0}")]
    Logging(String),
    #[error("Source error: {0}")]
    Source(String),
    #[error("Index {index} out of the limits [0, {len}[")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Column <{0}> does not exist")]
    ColumnNotFound(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, DbAssayError>;

// Helper conversions
impl From<rusqlite::Error> for DbAssayError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Source(e.to_string())
    }
}
impl From<::config::ConfigError> for DbAssayError {
    fn from(e: ::config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
