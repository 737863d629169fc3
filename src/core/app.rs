use crate::config::Config;
use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::form_event::FormEvent;
use crate::core::reducer::Reducer;
use crate::core::state::{AppState, Outcome};
use crate::terminal::KeyEvent;
use crate::ui::frame::Frame;
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use tracing::{debug, info, trace};

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(Theme::from_config(&config.theme), config.hint),
            action_bindings: ActionBindings::new(),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let action = self
            .action_bindings
            .handle_key(&key_event)
            .unwrap_or(Action::InputKey(key_event));
        self.dispatch(action);
    }

    pub fn dispatch(&mut self, action: Action) {
        let events = Reducer::reduce(&mut self.state, action);
        for event in &events {
            log_event(event);
        }
    }

    pub fn render(&self) -> Frame {
        self.renderer.render(&self.state)
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }
}

fn log_event(event: &FormEvent) {
    match event {
        FormEvent::FieldChanged { field, has_error } => {
            debug!(field = %field, has_error, "input changed");
        }
        FormEvent::FocusChanged { from, to } => {
            trace!(?from, ?to, "focus changed");
        }
        FormEvent::SubmitBlocked => debug!("confirm pressed while form is incomplete"),
        FormEvent::SubmitRejected { fields } => {
            let fields: Vec<&str> = fields.iter().map(|f| f.id()).collect();
            info!(?fields, "submission rejected");
        }
        FormEvent::Submitted => info!("card details accepted"),
        FormEvent::Exited(outcome) => info!(?outcome, "form closed"),
    }
}
