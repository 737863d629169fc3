use crate::core::field::Field;
use crate::error::{AppError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cardform", version, about = "Interactive credit card form with a live card preview")]
pub struct Cli {
    /// YAML config file (defaults to ./cardform.yaml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file; overrides `logging.file` from the config
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Drive the form headlessly and print the rendered frame as JSON
    #[arg(long)]
    pub snapshot: bool,

    /// Field assignment applied in order before the snapshot, e.g. cvc=123
    #[arg(long = "set", value_name = "FIELD=VALUE", requires = "snapshot")]
    pub assignments: Vec<String>,

    /// Run the full validation pass after the assignments
    #[arg(long, requires = "snapshot")]
    pub submit: bool,
}

pub fn parse_assignment(raw: &str) -> Result<(Field, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::Assignment(raw.to_string()))?;
    let field = name.trim().parse::<Field>()?;
    Ok((field, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_splits_on_first_equals() {
        let (field, value) = parse_assignment("name=Jane=Doe").unwrap();
        assert_eq!(field, Field::Name);
        assert_eq!(value, "Jane=Doe");
    }

    #[test]
    fn assignment_without_equals_is_rejected() {
        assert!(matches!(
            parse_assignment("cvc"),
            Err(AppError::Assignment(_))
        ));
    }

    #[test]
    fn assignment_to_unknown_field_is_rejected() {
        assert!(matches!(
            parse_assignment("email=x"),
            Err(AppError::UnknownField(_))
        ));
    }

    #[test]
    fn set_requires_snapshot() {
        assert!(Cli::try_parse_from(["cardform", "--set", "cvc=1"]).is_err());
        let cli = Cli::try_parse_from(["cardform", "--snapshot", "--set", "cvc=1", "--submit"])
            .unwrap();
        assert_eq!(cli.assignments, vec!["cvc=1".to_string()]);
        assert!(cli.submit);
    }
}
