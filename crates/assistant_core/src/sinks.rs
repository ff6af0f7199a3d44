//! Boundary traits - how the core reports outward
//!
//! The host UI implements these; the core never touches presentation
//! directly. Both sinks are fire-and-forget: the core does not observe
//! whether the host rendered anything.

use crate::transcript::ConversationEntry;

/// Screen-reader announcement sink.
///
/// The host renders the message into a polite live region and removes it
/// after a short fixed lifetime (see `AssistantConfig::announcement_lifetime_ms`).
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &str);
}

/// Render sink for state changes the host must reflect visually.
pub trait RenderSink: Send + Sync {
    /// A new entry was appended to the transcript.
    fn render_message(&self, entry: &ConversationEntry);

    /// Show or hide the "thinking" indicator.
    fn render_typing_indicator(&self, visible: bool);

    /// An accordion panel changed expansion state.
    fn render_accordion_state(&self, panel_id: &str, expanded: bool);
}

/// Announcer that drops everything. Useful for headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&self, _message: &str) {}
}

/// Render sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderSink;

impl RenderSink for NullRenderSink {
    fn render_message(&self, _entry: &ConversationEntry) {}
    fn render_typing_indicator(&self, _visible: bool) {}
    fn render_accordion_state(&self, _panel_id: &str, _expanded: bool) {}
}
