//! Input events and the per-iteration set of pending ones.

use heapless::Vec;
use ufmt::derive::uDebug;

use crate::{
    credential::Credential,
    input::{Press, Step},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum InputEvent {
    EncoderStep(Step),
    SelectPressed,
    AdminPressed(Press),
    CredentialSeen(Credential),
    /// The module went from busy to idle, or said it finished a track
    ModuleIdleEdge,
}

/// At most one pending event per source. Recording a second event from the
/// same source replaces the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, uDebug)]
pub struct Pending {
    pub credential: Option<Credential>,
    pub admin: Option<Press>,
    pub select: bool,
    pub step: Option<Step>,
    pub module_idle: bool,
}

impl Pending {
    pub fn record(&mut self, event: InputEvent) {
        match event {
            InputEvent::EncoderStep(step) => self.step = Some(step),
            InputEvent::SelectPressed => self.select = true,
            InputEvent::AdminPressed(press) => self.admin = Some(press),
            InputEvent::CredentialSeen(credential) => self.credential = Some(credential),
            InputEvent::ModuleIdleEdge => self.module_idle = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The pending events in the order the session handles them.
    pub fn events(&self) -> Vec<InputEvent, 5> {
        let mut events = Vec::new();
        // Capacity matches the number of sources, pushes can't fail
        if let Some(credential) = self.credential {
            let _ = events.push(InputEvent::CredentialSeen(credential));
        }
        if let Some(press) = self.admin {
            let _ = events.push(InputEvent::AdminPressed(press));
        }
        if self.select {
            let _ = events.push(InputEvent::SelectPressed);
        }
        if let Some(step) = self.step {
            let _ = events.push(InputEvent::EncoderStep(step));
        }
        if self.module_idle {
            let _ = events.push(InputEvent::ModuleIdleEdge);
        }
        events
    }
}

impl FromIterator<InputEvent> for Pending {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        let mut pending = Pending::default();
        for event in events {
            pending.record(event);
        }
        pending
    }
}
