//! Widget FSM module
//!
//! Split into states, events, and the transition function.

mod events;
mod states;
mod transitions;

pub use events::WidgetEvent;
pub use states::{OpenPhase, WidgetState};
pub use transitions::{StateTransition, WidgetMachine};
