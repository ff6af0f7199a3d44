//! widget_state - State machines for the assistant widget and FAQ accordion
//!
//! This crate provides the pure transition logic:
//! - `machine` - the widget FSM (closed / open / awaiting reply)
//! - `accordion` - exclusive-open FAQ panels
//! - `focus` - wrap-around focus cycling while the widget is open
//!
//! No rendering or timers live here; transitions return what changed and
//! the session layer drives side effects.

pub mod accordion;
pub mod focus;
pub mod machine;

// Re-export commonly used types
pub use accordion::{Accordion, Panel, PanelDelta};
pub use focus::FocusRing;
pub use machine::{OpenPhase, StateTransition, WidgetEvent, WidgetMachine, WidgetState};
