use crate::config::LoggingConfig;
use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Interactive mode: never write to the terminal being drawn on.
    File(&'a Path),
    Stderr,
    Off,
}

impl<'a> LogTarget<'a> {
    pub fn interactive(file: Option<&'a Path>) -> Self {
        file.map_or(LogTarget::Off, LogTarget::File)
    }
}

fn filter_for(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|_| AppError::LogLevel(level.to_string()))
}

pub fn init(config: &LoggingConfig, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter_for(&config.level)?);

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => builder
            .with_writer(io::stderr)
            .try_init()
            .map_err(|_| AppError::LoggingInit),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| AppError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|_| AppError::LoggingInit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_logging_needs_a_file() {
        assert_eq!(LogTarget::interactive(None), LogTarget::Off);
        let path = Path::new("cardform.log");
        assert_eq!(LogTarget::interactive(Some(path)), LogTarget::File(path));
    }

    #[test]
    fn off_installs_nothing() {
        assert!(init(&LoggingConfig::default(), LogTarget::Off).is_ok());
    }

    #[test]
    fn unopenable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cardform.log");
        let err = init(&LoggingConfig::default(), LogTarget::File(&path)).unwrap_err();
        assert!(matches!(err, AppError::LogFile { .. }));
    }
}
