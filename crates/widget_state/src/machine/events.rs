//! Widget events
//!
//! Discrete external events that can move the widget FSM.

use serde::{Deserialize, Serialize};

/// Events that can trigger widget state transitions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WidgetEvent {
    /// The trigger control (or the close control) was activated.
    ToggleRequested,

    /// Escape was pressed while the widget was open.
    EscapePressed,

    /// A click landed outside the widget boundary while it was open.
    ClickOutside,

    /// A non-blank message was accepted for sending.
    MessageSubmitted,

    /// The simulated thinking delay elapsed and the reply was delivered.
    ReplyDelivered,

    /// The pending reply was cancelled before its delay elapsed.
    ReplyCancelled,
}

impl WidgetEvent {
    /// Dismissal events all resolve to the same close transition.
    pub fn is_dismissal(&self) -> bool {
        matches!(self, Self::EscapePressed | Self::ClickOutside)
    }
}
