use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid log level '{0}'")]
    LogLevel(String),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logging already initialized")]
    LoggingInit,

    #[error("expected FIELD=VALUE, got '{0}'")]
    Assignment(String),

    #[error(transparent)]
    UnknownField(#[from] crate::core::field::UnknownField),

    #[error("cannot encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
