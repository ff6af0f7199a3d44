//! Widget FSM transition logic

use super::events::WidgetEvent;
use super::states::{OpenPhase, WidgetState};

/// Represents a state transition result.
#[derive(Debug, Clone, Copy)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: WidgetState,
    /// The state after the transition.
    pub to: WidgetState,
    /// The event that triggered the transition.
    pub event: WidgetEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

impl StateTransition {
    /// True when this transition entered the open state.
    pub fn opened(&self) -> bool {
        self.changed && !self.from.is_open() && self.to.is_open()
    }

    /// True when this transition left the open state.
    pub fn closed(&self) -> bool {
        self.changed && self.from.is_open() && !self.to.is_open()
    }
}

/// State machine for the assistant widget. One instance per page session.
#[derive(Debug, Clone)]
pub struct WidgetMachine {
    current_state: WidgetState,
    history: Vec<StateTransition>,
    max_history: usize,
}

impl Default for WidgetMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetMachine {
    /// Create a new machine in the Closed state.
    pub fn new() -> Self {
        Self {
            current_state: WidgetState::Closed,
            history: Vec::new(),
            max_history: 50,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.current_state
    }

    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: WidgetEvent) -> StateTransition {
        let old_state = self.current_state;
        let new_state = Self::compute_next_state(old_state, event);
        let changed = old_state != new_state;

        tracing::debug!(?old_state, ?new_state, ?event, "widget transition");
        self.current_state = new_state;

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        self.history.push(transition);
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    fn compute_next_state(state: WidgetState, event: WidgetEvent) -> WidgetState {
        use WidgetEvent::*;
        use WidgetState::*;

        match (state, event) {
            // Opening and closing. Escape and an outside click resolve to the
            // same close transition as the explicit toggle.
            (Closed, ToggleRequested) => WidgetState::open_idle(),
            (Open { .. }, ToggleRequested) => Closed,
            (Open { .. }, EscapePressed) => Closed,
            (Open { .. }, ClickOutside) => Closed,

            // Send choreography.
            (
                Open {
                    phase: OpenPhase::Idle,
                },
                MessageSubmitted,
            ) => WidgetState::open_awaiting(),
            (
                Open {
                    phase: OpenPhase::AwaitingResponse,
                },
                ReplyDelivered,
            ) => WidgetState::open_idle(),
            (
                Open {
                    phase: OpenPhase::AwaitingResponse,
                },
                ReplyCancelled,
            ) => WidgetState::open_idle(),

            // A reply queued before the widget was closed still fires; the
            // widget stays closed when it lands.
            _ => state,
        }
    }

    /// Check if a transition would change state, without executing it.
    pub fn can_transition(&self, event: WidgetEvent) -> bool {
        Self::compute_next_state(self.current_state, event) != self.current_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_open_and_closed() {
        let mut machine = WidgetMachine::new();

        let opened = machine.handle_event(WidgetEvent::ToggleRequested);
        assert!(opened.changed);
        assert!(opened.opened());
        assert_eq!(machine.state(), WidgetState::open_idle());

        let closed = machine.handle_event(WidgetEvent::ToggleRequested);
        assert!(closed.closed());
        assert_eq!(machine.state(), WidgetState::Closed);
    }

    #[test]
    fn test_escape_and_click_outside_match_explicit_close() {
        for event in [WidgetEvent::EscapePressed, WidgetEvent::ClickOutside] {
            let mut machine = WidgetMachine::new();
            machine.handle_event(WidgetEvent::ToggleRequested);

            let transition = machine.handle_event(event);
            assert!(transition.closed());
            assert_eq!(machine.state(), WidgetState::Closed);
        }
    }

    #[test]
    fn test_escape_while_closed_is_no_change() {
        let mut machine = WidgetMachine::new();
        let transition = machine.handle_event(WidgetEvent::EscapePressed);
        assert!(!transition.changed);
        assert_eq!(machine.state(), WidgetState::Closed);
    }

    #[test]
    fn test_send_and_reply_round_trip() {
        let mut machine = WidgetMachine::new();
        machine.handle_event(WidgetEvent::ToggleRequested);

        let sent = machine.handle_event(WidgetEvent::MessageSubmitted);
        assert!(sent.changed);
        assert!(machine.state().is_awaiting_reply());

        let delivered = machine.handle_event(WidgetEvent::ReplyDelivered);
        assert!(delivered.changed);
        assert_eq!(machine.state(), WidgetState::open_idle());
    }

    #[test]
    fn test_submit_while_awaiting_does_not_transition() {
        let mut machine = WidgetMachine::new();
        machine.handle_event(WidgetEvent::ToggleRequested);
        machine.handle_event(WidgetEvent::MessageSubmitted);

        let second = machine.handle_event(WidgetEvent::MessageSubmitted);
        assert!(!second.changed);
        assert!(machine.state().is_awaiting_reply());
    }

    #[test]
    fn test_reply_into_closed_widget_stays_closed() {
        let mut machine = WidgetMachine::new();
        machine.handle_event(WidgetEvent::ToggleRequested);
        machine.handle_event(WidgetEvent::MessageSubmitted);
        machine.handle_event(WidgetEvent::ToggleRequested);
        assert_eq!(machine.state(), WidgetState::Closed);

        let transition = machine.handle_event(WidgetEvent::ReplyDelivered);
        assert!(!transition.changed);
        assert_eq!(machine.state(), WidgetState::Closed);
    }

    #[test]
    fn test_history_tracking() {
        let mut machine = WidgetMachine::new();
        machine.handle_event(WidgetEvent::ToggleRequested);
        machine.handle_event(WidgetEvent::MessageSubmitted);

        assert_eq!(machine.history().len(), 2);
        assert!(machine.history()[0].opened());
    }
}
