use crate::core::state::AppState;
use crate::ui::card_preview;
use crate::ui::form_view;
use crate::ui::frame::Frame;
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    show_hint: bool,
}

impl Renderer {
    pub fn new(theme: Theme, show_hint: bool) -> Self {
        Self { theme, show_hint }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Card back, card front, then either the form or the confirmation panel.
    pub fn render(&self, state: &AppState) -> Frame {
        let fields = &state.form.fields;
        let mut frame = card_preview::render_back(fields, &self.theme);
        frame.extend(card_preview::render_front(fields, &self.theme));
        frame.blank_line();

        if state.form.submitted {
            frame.extend(form_view::render_confirmation(state, &self.theme));
        } else {
            frame.extend(form_view::render_form(state, &self.theme));
        }

        if self.show_hint {
            frame.blank_line();
            frame.extend(form_view::render_hint(&self.theme));
        }
        frame
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default_theme(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::Field;
    use crate::terminal::CursorPos;

    #[test]
    fn form_cursor_is_offset_below_the_cards() {
        let state = AppState::new();
        let frame = Renderer::default().render(&state);
        // two 7-row card faces and a spacer precede the form
        assert_eq!(frame.cursor(), Some(CursorPos { col: 2, row: 16 }));
    }

    #[test]
    fn preview_mirrors_live_input() {
        let mut state = AppState::new();
        state.form = state.form.update_field(Field::CardNumber, "5555444433332222");
        let text = Renderer::default().render(&state).to_plain_text();
        assert_eq!(text.matches("5555 4444 3333 2222").count(), 2);
    }

    #[test]
    fn submitted_state_has_no_cursor() {
        let mut state = AppState::new();
        state.form = state
            .form
            .update_field(Field::Name, "Jane Appleseed")
            .update_field(Field::CardNumber, "4242424242424242")
            .update_field(Field::Month, "12")
            .update_field(Field::Year, "25")
            .update_field(Field::Cvc, "123")
            .submit_all();
        let frame = Renderer::new(Theme::default_theme(), false).render(&state);
        assert_eq!(frame.cursor(), None);
        assert!(frame.to_plain_text().contains(form_view::THANK_YOU));
        assert!(!frame.to_plain_text().contains(form_view::KEY_HINT));
    }
}
