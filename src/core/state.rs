use crate::core::field::Field;
use crate::core::form_state::FormState;
use crate::input::field_input::FieldInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Field),
    Confirm,
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

const FORM_RING: [FocusTarget; 6] = [
    FocusTarget::Field(Field::Name),
    FocusTarget::Field(Field::CardNumber),
    FocusTarget::Field(Field::Month),
    FocusTarget::Field(Field::Year),
    FocusTarget::Field(Field::Cvc),
    FocusTarget::Confirm,
];

const CONFIRMATION_RING: [FocusTarget; 1] = [FocusTarget::Continue];

pub struct AppState {
    pub form: FormState,
    inputs: Vec<FieldInput>,
    focus: FocusTarget,
    pub should_exit: bool,
    pub outcome: Option<Outcome>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            inputs: Field::ALL.into_iter().map(FieldInput::new).collect(),
            focus: FORM_RING[0],
            should_exit: false,
            outcome: None,
        }
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            FocusTarget::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
    }

    /// Focus targets reachable in the current phase, in tab order.
    pub fn focus_ring(&self) -> &'static [FocusTarget] {
        if self.form.submitted {
            &CONFIRMATION_RING
        } else {
            &FORM_RING
        }
    }

    pub fn step_focus(&self, direction: isize) -> FocusTarget {
        let ring = self.focus_ring();
        let len = ring.len() as isize;
        let current = ring
            .iter()
            .position(|target| *target == self.focus)
            .unwrap_or(0) as isize;
        ring[((current + direction).rem_euclid(len)) as usize]
    }

    pub fn input(&self, field: Field) -> &FieldInput {
        &self.inputs[Self::slot(field)]
    }

    pub fn input_mut(&mut self, field: Field) -> &mut FieldInput {
        &mut self.inputs[Self::slot(field)]
    }

    fn slot(field: Field) -> usize {
        match field {
            Field::Name => 0,
            Field::CardNumber => 1,
            Field::Month => 2,
            Field::Year => 3,
            Field::Cvc => 4,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
