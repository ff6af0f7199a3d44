//! The session-scoped owner object
//!
//! All state lives here as explicit instances rather than ambient module
//! state; every operation maps to one host input event. Single logical
//! thread of control, so no locking: the only suspension point is the reply
//! timer in `run_pending_reply`.

use std::sync::Arc;
use std::time::Duration;

use assistant_core::{Announcer, AssistantConfig, ConversationEntry, RenderSink, Transcript};
use dialogue_engine::DialogueEngine;
use widget_state::{
    Accordion, FocusRing, Panel, PanelDelta, StateTransition, WidgetEvent, WidgetMachine,
    WidgetState,
};

use crate::quick_actions::quick_action_query;
use crate::reply::PendingReply;

const OPENED_ANNOUNCEMENT: &str = "Chatbot opened. Type your message about Vision 30.";
const CLOSED_ANNOUNCEMENT: &str = "Chatbot closed.";

/// One page session's assistant widget and FAQ accordion.
pub struct AssistantSession {
    machine: WidgetMachine,
    engine: DialogueEngine,
    transcript: Transcript,
    accordion: Accordion,
    focus: FocusRing,
    config: AssistantConfig,
    announcer: Arc<dyn Announcer>,
    render: Arc<dyn RenderSink>,
}

impl AssistantSession {
    pub fn new(
        config: AssistantConfig,
        announcer: Arc<dyn Announcer>,
        render: Arc<dyn RenderSink>,
    ) -> Self {
        Self {
            machine: WidgetMachine::new(),
            engine: DialogueEngine::default(),
            transcript: Transcript::new(),
            accordion: Accordion::default(),
            focus: FocusRing::default(),
            config,
            announcer,
            render,
        }
    }

    /// Replace the builtin rule table, e.g. for a host with custom content.
    pub fn with_engine(mut self, engine: DialogueEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn register_panel(&mut self, panel: Panel) {
        self.accordion.register(panel);
    }

    /// Register the widget's focusable element ids, in tab order.
    pub fn set_focus_targets(&mut self, targets: Vec<String>) {
        self.focus = FocusRing::new(targets);
    }

    pub fn widget_state(&self) -> WidgetState {
        self.machine.state()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    // ---- Widget visibility -------------------------------------------------

    /// The trigger or close control was activated.
    pub fn toggle_widget(&mut self) -> StateTransition {
        self.apply_visibility_event(WidgetEvent::ToggleRequested)
    }

    /// Escape pressed; closes the widget if open, otherwise no-op.
    pub fn escape_pressed(&mut self) -> StateTransition {
        self.apply_visibility_event(WidgetEvent::EscapePressed)
    }

    /// Click landed outside the widget boundary; same close transition.
    pub fn click_outside(&mut self) -> StateTransition {
        self.apply_visibility_event(WidgetEvent::ClickOutside)
    }

    fn apply_visibility_event(&mut self, event: WidgetEvent) -> StateTransition {
        let transition = self.machine.handle_event(event);
        if transition.opened() {
            // Focus moves to the input surface; the host performs the move.
            self.announcer.announce(OPENED_ANNOUNCEMENT);
        } else if transition.closed() {
            self.announcer.announce(CLOSED_ANNOUNCEMENT);
        }
        transition
    }

    // ---- Focus containment -------------------------------------------------

    /// Tab while open: the element the host should focus next.
    pub fn focus_next(&mut self) -> Option<&str> {
        self.focus.next()
    }

    /// Shift-Tab while open.
    pub fn focus_prev(&mut self) -> Option<&str> {
        self.focus.prev()
    }

    // ---- Conversation ------------------------------------------------------

    /// Accept a user message for sending.
    ///
    /// Blank input, a closed widget, or an already-pending reply are silent
    /// no-ops. Otherwise the user entry is appended and rendered
    /// synchronously, the typing indicator is shown, and the computed reply
    /// comes back as a `PendingReply` to be delivered after its delay.
    pub fn submit_message(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if !self.machine.state().accepts_input() {
            tracing::warn!(state = ?self.machine.state(), "message submitted in non-input state");
            return None;
        }

        let entry = ConversationEntry::user(text);
        self.render.render_message(&entry);
        self.transcript.push(entry);

        let classification = self.engine.classify(text);
        self.machine.handle_event(WidgetEvent::MessageSubmitted);
        self.render.render_typing_indicator(true);

        Some(PendingReply::new(
            classification,
            Duration::from_millis(self.config.reply_delay_ms),
        ))
    }

    /// A quick-action shortcut; equivalent to typing its query and sending.
    pub fn click_quick_action(&mut self, action_id: &str) -> Option<PendingReply> {
        match quick_action_query(action_id) {
            Some(query) => self.submit_message(query),
            None => {
                tracing::warn!(%action_id, "unknown quick action ignored");
                None
            }
        }
    }

    /// Deliver a pending reply now: hide the typing indicator, append and
    /// render the assistant entry, announce it, and return to idle.
    ///
    /// A reply landing in a closed widget is still appended and announced;
    /// the widget stays closed.
    pub fn deliver_reply(&mut self, pending: PendingReply) {
        self.render.render_typing_indicator(false);

        let classification = pending.into_classification();
        let entry = ConversationEntry::assistant(classification.response);
        self.render.render_message(&entry);
        self.announcer.announce(&format!(
            "{}: {}",
            entry.sender.display_name(),
            entry.text
        ));
        self.transcript.push(entry);

        self.machine.handle_event(WidgetEvent::ReplyDelivered);
    }

    /// Wait out the simulated thinking delay, then deliver the reply.
    ///
    /// Cancelling the pending reply's token instead suppresses delivery:
    /// the typing indicator is hidden and the widget returns to idle with
    /// only the user entry on the transcript.
    pub async fn run_pending_reply(&mut self, pending: PendingReply) {
        let token = pending.cancellation_token();
        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!("pending reply cancelled before delivery");
                self.render.render_typing_indicator(false);
                self.machine.handle_event(WidgetEvent::ReplyCancelled);
            }
            _ = tokio::time::sleep(pending.delay()) => {
                self.deliver_reply(pending);
            }
        }
    }

    // ---- FAQ accordion -----------------------------------------------------

    /// Toggle an accordion panel, keeping at most one expanded.
    ///
    /// Every changed panel is pushed to the render sink so visual and ARIA
    /// state update together; the toggled panel is announced.
    pub fn toggle_accordion_panel(&mut self, panel_id: &str) -> Vec<PanelDelta> {
        let deltas = self.accordion.toggle(panel_id);

        for delta in &deltas {
            self.render
                .render_accordion_state(&delta.panel_id, delta.expanded);
        }

        // The toggled panel is always the last delta.
        if let Some(target) = deltas.last() {
            let announcement = if target.expanded {
                format!("Expanded {}", target.label)
            } else {
                format!("Collapsed {}", target.label)
            };
            self.announcer.announce(&announcement);
        }

        deltas
    }
}
