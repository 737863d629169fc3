//! End-to-end form scenarios through the public API.

use cardform::app::App;
use cardform::config::Config;
use cardform::event::Action;
use cardform::state::{FocusTarget, Outcome};
use cardform::terminal::{KeyCode, KeyEvent, KeyModifiers};
use cardform::validation::NAME_ERROR;
use cardform::{Field, FormState};
use std::io::Write;

fn valid_state() -> FormState {
    FormState::new()
        .update_field(Field::Name, "Jane Appleseed")
        .update_field(Field::CardNumber, "4242424242424242")
        .update_field(Field::Month, "12")
        .update_field(Field::Year, "25")
        .update_field(Field::Cvc, "123")
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_key(KeyEvent::plain(KeyCode::Char(ch)));
    }
}

// =============================================================================
// Pure state transitions
// =============================================================================

#[test]
fn filling_every_field_makes_the_form_valid() {
    let state = valid_state();
    assert!(state.is_valid());
    assert_eq!(state.fields.card_number, "4242 4242 4242 4242");
}

#[test]
fn submit_catches_an_untouched_name() {
    let state = FormState::new()
        .update_field(Field::CardNumber, "4242424242424242")
        .update_field(Field::Month, "12")
        .update_field(Field::Year, "25")
        .update_field(Field::Cvc, "123");

    let submitted = state.submit_all();
    assert!(!submitted.submitted);
    assert_eq!(submitted.error(Field::Name), Some(NAME_ERROR));
}

#[test]
fn submit_all_is_authoritative_over_a_stale_error_map() {
    // The live check only sees errors for edited fields; the name was never
    // edited, so nothing blocks it except the emptiness check.
    let mut state = valid_state();
    state.fields.name.clear();
    state.errors = cardform::ErrorMap::new();
    assert!(!state.is_valid());

    let next = state.submit_all();
    assert!(!next.submitted);
    assert_eq!(next.errors.first_error(), Some(Field::Name));
}

#[test]
fn valid_submission_sets_submitted() {
    let state = valid_state().submit_all();
    assert!(state.submitted);
    assert!(state.errors.is_clear());
}

// =============================================================================
// Keyboard-driven flow
// =============================================================================

#[test]
fn keyboard_session_reaches_confirmation() {
    let mut app = App::new(&Config::default());
    for text in ["Jane Appleseed", "4242 4242 4242 4242", "12", "25", "123"] {
        type_text(&mut app, text);
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
    }
    assert_eq!(app.state.focus(), FocusTarget::Confirm);
    assert_eq!(app.state.form.fields.card_number, "4242 4242 4242 4242");

    app.handle_key(KeyEvent::plain(KeyCode::Enter));
    assert!(app.state.form.submitted);
    assert!(app.render().to_plain_text().contains("Thank you!!!"));

    app.handle_key(KeyEvent::plain(KeyCode::Enter));
    assert!(app.should_exit());
    assert_eq!(app.outcome(), Some(Outcome::Completed));
}

#[test]
fn ctrl_s_submits_even_when_the_button_is_disabled() {
    let mut app = App::new(&Config::default());
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(!app.state.form.submitted);
    assert_eq!(app.state.form.errors.iter().count(), 5);
    assert_eq!(app.state.focus(), FocusTarget::Field(Field::Name));
    assert!(app.render().to_plain_text().contains(NAME_ERROR));
}

#[test]
fn change_events_replace_the_whole_value() {
    let mut app = App::new(&Config::default());
    app.dispatch(Action::Change {
        field: Field::CardNumber,
        raw: "5555-4444-3333-2222".to_string(),
    });
    assert_eq!(app.state.form.fields.card_number, "5555 4444 3333 2222");
    assert_eq!(app.state.form.error(Field::CardNumber), None);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_file_changes_theme_and_hint() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme:\n  accent: cyan\nhint: false").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    let app = App::new(&config);
    let text = app.render().to_plain_text();
    assert!(!text.contains("Esc quit"));
    assert_eq!(
        app.renderer.theme().card_border.color,
        Some(cardform::ui::style::Color::Cyan)
    );
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");
    assert!(Config::load(Some(&missing)).is_err());
}
