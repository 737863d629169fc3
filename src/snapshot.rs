use crate::cli::parse_assignment;
use crate::config::Config;
use crate::core::app::App;
use crate::core::event::Action;
use crate::error::Result;
use crate::ui::frame_json::frame_to_json;

/// Apply `field=value` assignments (and optionally a submit) to a fresh
/// form and return the resulting state plus rendered frame.
pub fn snapshot<S: AsRef<str>>(
    config: &Config,
    assignments: &[S],
    submit: bool,
) -> Result<serde_json::Value> {
    let mut app = App::new(config);
    for raw in assignments {
        let (field, raw) = parse_assignment(raw.as_ref())?;
        app.dispatch(Action::Change { field, raw });
    }
    if submit {
        app.dispatch(Action::Submit);
    }

    Ok(serde_json::json!({
        "state": serde_json::to_value(&app.state.form)?,
        "valid": app.state.form.is_valid(),
        "frame": frame_to_json(&app.render()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_state_and_frame() {
        let json = snapshot(&Config::default(), &["cardNumber=4242424242424242"], false).unwrap();
        assert_eq!(json["state"]["fields"]["cardNumber"], "4242 4242 4242 4242");
        assert_eq!(json["state"]["errors"]["cardNumber"], "");
        assert_eq!(json["valid"], false);
        assert!(
            json["frame"]["text"]
                .as_str()
                .unwrap()
                .contains("4242 4242 4242 4242")
        );
    }

    #[test]
    fn submit_flag_runs_full_validation() {
        let json = snapshot(&Config::default(), &["cvc=123"], true).unwrap();
        assert_eq!(json["state"]["submitted"], false);
        assert_eq!(json["state"]["errors"]["name"], "Name must contain only letters");
        assert!(json["state"]["errors"].get("cvc").is_none());
    }

    #[test]
    fn bad_assignment_is_an_error() {
        assert!(snapshot(&Config::default(), &["nope"], false).is_err());
    }
}
