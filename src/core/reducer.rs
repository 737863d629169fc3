use crate::core::event::Action;
use crate::core::field::Field;
use crate::core::form_event::FormEvent;
use crate::core::state::{AppState, FocusTarget, Outcome};
use crate::input::field_input::EditOutcome;
use crate::terminal::{KeyCode, KeyEvent};

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action) -> Vec<FormEvent> {
        match action {
            Action::Exit => {
                let outcome = if state.form.submitted {
                    Outcome::Completed
                } else {
                    Outcome::Cancelled
                };
                Self::exit(state, outcome)
            }
            Action::NextInput => Self::move_focus(state, 1),
            Action::PrevInput => Self::move_focus(state, -1),
            Action::Submit => {
                if state.form.submitted {
                    return vec![];
                }
                Self::submit(state)
            }
            Action::Change { field, raw } => {
                if state.form.submitted {
                    return vec![];
                }
                let event = Self::apply_edit(state, field, &raw);
                let stored = state.form.value(field).to_string();
                state.input_mut(field).move_to_end(&stored);
                vec![event]
            }
            Action::InputKey(key) => Self::handle_key(state, key),
        }
    }

    fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<FormEvent> {
        match state.focus() {
            FocusTarget::Field(field) => {
                if state.form.submitted {
                    return vec![];
                }
                let value = state.form.value(field).to_string();
                match state.input_mut(field).handle_key(&value, key) {
                    EditOutcome::Edited(raw) => {
                        let event = Self::apply_edit(state, field, &raw);
                        let stored = state.form.value(field).to_string();
                        state.input_mut(field).settle(&raw, &stored);
                        vec![event]
                    }
                    EditOutcome::Advance => Self::move_focus(state, 1),
                    EditOutcome::Handled | EditOutcome::Ignored => vec![],
                }
            }
            FocusTarget::Confirm if is_activation(key) => {
                // The button is disabled while the live check fails.
                if state.form.is_valid() {
                    Self::submit(state)
                } else {
                    vec![FormEvent::SubmitBlocked]
                }
            }
            FocusTarget::Continue if is_activation(key) => Self::exit(state, Outcome::Completed),
            FocusTarget::Confirm | FocusTarget::Continue => vec![],
        }
    }

    fn apply_edit(state: &mut AppState, field: Field, raw: &str) -> FormEvent {
        state.form = state.form.update_field(field, raw);
        FormEvent::FieldChanged {
            field,
            has_error: state.form.error(field).is_some(),
        }
    }

    fn move_focus(state: &mut AppState, direction: isize) -> Vec<FormEvent> {
        let to = state.step_focus(direction);
        Self::focus(state, to).into_iter().collect()
    }

    fn focus(state: &mut AppState, to: FocusTarget) -> Option<FormEvent> {
        let from = state.focus();
        if from == to {
            return None;
        }
        if let FocusTarget::Field(field) = to {
            let value = state.form.value(field).to_string();
            state.input_mut(field).move_to_end(&value);
        }
        state.set_focus(to);
        Some(FormEvent::FocusChanged { from, to })
    }

    fn submit(state: &mut AppState) -> Vec<FormEvent> {
        state.form = state.form.submit_all();
        let mut events = Vec::new();

        if state.form.submitted {
            events.push(FormEvent::Submitted);
            events.extend(Self::focus(state, FocusTarget::Continue));
            return events;
        }

        let fields: Vec<Field> = state.form.errors.iter().map(|(field, _)| field).collect();
        events.push(FormEvent::SubmitRejected { fields });
        if let Some(first) = state.form.errors.first_error() {
            events.extend(Self::focus(state, FocusTarget::Field(first)));
        }
        events
    }

    fn exit(state: &mut AppState, outcome: Outcome) -> Vec<FormEvent> {
        state.should_exit = true;
        state.outcome = Some(outcome);
        vec![FormEvent::Exited(outcome)]
    }
}

fn is_activation(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::NAME_ERROR;

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            Reducer::reduce(state, Action::InputKey(KeyEvent::plain(KeyCode::Char(ch))));
        }
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<FormEvent> {
        Reducer::reduce(state, Action::InputKey(KeyEvent::plain(code)))
    }

    fn fill_by_keyboard(state: &mut AppState) {
        for text in ["Jane Appleseed", "4242424242424242", "12", "25", "123"] {
            type_text(state, text);
            press(state, KeyCode::Enter);
        }
    }

    #[test]
    fn typing_flows_through_update_field() {
        let mut state = AppState::new();
        type_text(&mut state, "42424242");
        state.set_focus(FocusTarget::Field(Field::CardNumber));
        type_text(&mut state, "42424242");
        assert_eq!(state.form.fields.name, "42424242");
        assert_eq!(state.form.error(Field::Name), Some(NAME_ERROR));
        assert_eq!(state.form.fields.card_number, "4242 4242");
    }

    #[test]
    fn enter_walks_fields_then_confirm_submits() {
        let mut state = AppState::new();
        fill_by_keyboard(&mut state);
        assert_eq!(state.focus(), FocusTarget::Confirm);
        assert!(state.form.is_valid());

        let events = press(&mut state, KeyCode::Enter);
        assert!(events.contains(&FormEvent::Submitted));
        assert!(state.form.submitted);
        assert_eq!(state.focus(), FocusTarget::Continue);
    }

    #[test]
    fn disabled_confirm_does_not_submit() {
        let mut state = AppState::new();
        state.set_focus(FocusTarget::Confirm);
        let events = press(&mut state, KeyCode::Enter);
        assert_eq!(events, vec![FormEvent::SubmitBlocked]);
        assert!(!state.form.submitted);
        assert!(state.form.errors.is_clear());
    }

    #[test]
    fn forced_submit_focuses_first_error() {
        let mut state = AppState::new();
        for (field, raw) in [
            (Field::CardNumber, "4242424242424242"),
            (Field::Month, "12"),
            (Field::Year, "25"),
            (Field::Cvc, "123"),
        ] {
            Reducer::reduce(&mut state, Action::Change { field, raw: raw.to_string() });
        }
        state.set_focus(FocusTarget::Confirm);

        let events = Reducer::reduce(&mut state, Action::Submit);
        assert!(events.contains(&FormEvent::SubmitRejected { fields: vec![Field::Name] }));
        assert_eq!(state.form.error(Field::Name), Some(NAME_ERROR));
        assert_eq!(state.focus(), FocusTarget::Field(Field::Name));
    }

    #[test]
    fn edits_are_ignored_after_submission() {
        let mut state = AppState::new();
        fill_by_keyboard(&mut state);
        press(&mut state, KeyCode::Enter);
        let before = state.form.clone();

        let events = Reducer::reduce(
            &mut state,
            Action::Change { field: Field::Cvc, raw: "999".to_string() },
        );
        assert!(events.is_empty());
        assert_eq!(state.form, before);
        assert_eq!(state.step_focus(1), FocusTarget::Continue);
    }

    #[test]
    fn continue_completes() {
        let mut state = AppState::new();
        fill_by_keyboard(&mut state);
        press(&mut state, KeyCode::Enter);
        let events = press(&mut state, KeyCode::Enter);
        assert_eq!(events, vec![FormEvent::Exited(Outcome::Completed)]);
        assert!(state.should_exit);
    }

    #[test]
    fn exit_before_submit_cancels() {
        let mut state = AppState::new();
        Reducer::reduce(&mut state, Action::Exit);
        assert_eq!(state.outcome, Some(Outcome::Cancelled));
    }
}
