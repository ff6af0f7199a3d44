//! Recording sinks shared by the integration suites.
#![allow(dead_code)] // not every suite inspects every sink

use std::sync::{Arc, Mutex};

use assistant_session::{
    Announcer, AssistantConfig, AssistantSession, ConversationEntry, RenderSink, Sender,
};

#[derive(Default)]
pub struct RecordingAnnouncer {
    messages: Mutex<Vec<String>>,
}

impl RecordingAnnouncer {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingRender {
    messages: Mutex<Vec<(Sender, String)>>,
    typing: Mutex<Vec<bool>>,
    accordion: Mutex<Vec<(String, bool)>>,
}

impl RecordingRender {
    pub fn messages(&self) -> Vec<(Sender, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn typing_events(&self) -> Vec<bool> {
        self.typing.lock().unwrap().clone()
    }

    pub fn accordion_events(&self) -> Vec<(String, bool)> {
        self.accordion.lock().unwrap().clone()
    }
}

impl RenderSink for RecordingRender {
    fn render_message(&self, entry: &ConversationEntry) {
        self.messages
            .lock()
            .unwrap()
            .push((entry.sender, entry.text.clone()));
    }

    fn render_typing_indicator(&self, visible: bool) {
        self.typing.lock().unwrap().push(visible);
    }

    fn render_accordion_state(&self, panel_id: &str, expanded: bool) {
        self.accordion
            .lock()
            .unwrap()
            .push((panel_id.to_string(), expanded));
    }
}

/// A session wired to recording sinks, plus handles to inspect them.
pub fn recorded_session() -> (
    AssistantSession,
    Arc<RecordingAnnouncer>,
    Arc<RecordingRender>,
) {
    let announcer = Arc::new(RecordingAnnouncer::default());
    let render = Arc::new(RecordingRender::default());
    let session = AssistantSession::new(
        AssistantConfig::default(),
        announcer.clone(),
        render.clone(),
    );
    (session, announcer, render)
}
