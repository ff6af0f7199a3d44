//! Widget states
//!
//! The widget is either closed or open; while open it is idle or waiting
//! for the simulated reply to arrive.

use serde::{Deserialize, Serialize};

/// Sub-state of an open widget.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpenPhase {
    /// Ready for input.
    Idle,
    /// A reply timer is outstanding; the send affordance must stay disabled.
    AwaitingResponse,
}

/// Visibility state of the assistant widget.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    Closed,
    Open { phase: OpenPhase },
}

impl Default for WidgetState {
    fn default() -> Self {
        WidgetState::Closed
    }
}

impl WidgetState {
    pub fn open_idle() -> Self {
        WidgetState::Open {
            phase: OpenPhase::Idle,
        }
    }

    pub fn open_awaiting() -> Self {
        WidgetState::Open {
            phase: OpenPhase::AwaitingResponse,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, WidgetState::Open { .. })
    }

    /// Whether a new message may be sent from this state.
    pub fn accepts_input(&self) -> bool {
        matches!(
            self,
            WidgetState::Open {
                phase: OpenPhase::Idle
            }
        )
    }

    pub fn is_awaiting_reply(&self) -> bool {
        matches!(
            self,
            WidgetState::Open {
                phase: OpenPhase::AwaitingResponse
            }
        )
    }
}
