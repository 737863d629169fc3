use crate::error::{AppError, Result};
use crate::ui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "cardform.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub accent: Color,
    pub error: Color,
    pub placeholder: Color,
    pub text: Color,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: Color::Magenta,
            error: Color::Red,
            placeholder: Color::DarkGrey,
            text: Color::White,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
    pub hint: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            logging: LoggingConfig::default(),
            hint: true,
        }
    }
}

impl Config {
    /// An explicit path must exist; otherwise `./cardform.yaml` is used when
    /// present, and built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_theme_keeps_other_defaults() {
        let config = Config::parse("theme:\n  accent: cyan\n").unwrap();
        assert_eq!(config.theme.accent, Color::Cyan);
        assert_eq!(config.theme.error, Color::Red);
        assert!(config.hint);
    }

    #[test]
    fn rgb_colors_parse() {
        let config = Config::parse("theme:\n  accent: !rgb [33, 9, 47]\n").unwrap();
        assert_eq!(config.theme.accent, Color::Rgb([33, 9, 47]));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("colour: red\n").is_err());
    }
}
