//! assistant_session - Session-scoped owner of the widget core
//!
//! One `AssistantSession` exists per page session. It owns the widget state
//! machine, the dialogue engine and its transcript, and the FAQ accordion,
//! and reports outward through the `Announcer` and `RenderSink` boundary
//! traits. Hosts forward their input events to the matching session
//! operation and render whatever the sinks receive.

mod quick_actions;
mod reply;
mod session;

// Re-exports
pub use assistant_core::{
    Announcer, AssistantConfig, ConfigError, ConversationEntry, RenderSink, Sender, Transcript,
};
pub use dialogue_engine::{Classification, DialogueEngine, RuleTable};
pub use quick_actions::quick_action_query;
pub use reply::PendingReply;
pub use session::AssistantSession;
pub use widget_state::{Accordion, Panel, PanelDelta, StateTransition, WidgetState};
