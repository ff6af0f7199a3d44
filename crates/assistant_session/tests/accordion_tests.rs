//! FAQ accordion behavior through the session object.

mod common;

use assistant_session::Panel;
use common::recorded_session;

fn faq_panels() -> Vec<Panel> {
    vec![
        Panel::new("faq-1", "What is Vision 30?"),
        Panel::new("faq-2", "Who can apply?"),
        Panel::new("faq-3", "What does it cost?"),
    ]
}

#[test]
fn test_toggling_second_panel_collapses_first() {
    let (mut session, _announcer, _render) = recorded_session();
    for panel in faq_panels() {
        session.register_panel(panel);
    }

    session.toggle_accordion_panel("faq-1");
    session.toggle_accordion_panel("faq-2");

    assert!(!session.accordion().is_expanded("faq-1"));
    assert!(session.accordion().is_expanded("faq-2"));
}

#[test]
fn test_at_most_one_panel_expanded_after_any_sequence() {
    let (mut session, _announcer, _render) = recorded_session();
    for panel in faq_panels() {
        session.register_panel(panel);
    }

    let sequence = [
        "faq-2", "faq-2", "faq-1", "faq-3", "faq-3", "faq-1", "faq-2", "faq-1",
    ];
    for id in sequence {
        session.toggle_accordion_panel(id);
        assert!(
            session.accordion().expanded_count() <= 1,
            "exclusivity broken after toggling {id}"
        );
    }
}

#[test]
fn test_announcements_use_panel_labels() {
    let (mut session, announcer, _render) = recorded_session();
    for panel in faq_panels() {
        session.register_panel(panel);
    }

    session.toggle_accordion_panel("faq-1");
    session.toggle_accordion_panel("faq-1");

    let messages = announcer.messages();
    assert_eq!(messages[0], "Expanded What is Vision 30?");
    assert_eq!(messages[1], "Collapsed What is Vision 30?");
}

#[test]
fn test_render_sink_sees_every_expansion_change() {
    let (mut session, _announcer, render) = recorded_session();
    for panel in faq_panels() {
        session.register_panel(panel);
    }

    session.toggle_accordion_panel("faq-1");
    session.toggle_accordion_panel("faq-3");

    // faq-1 expand, then faq-1 collapse + faq-3 expand.
    assert_eq!(
        render.accordion_events(),
        vec![
            ("faq-1".to_string(), true),
            ("faq-1".to_string(), false),
            ("faq-3".to_string(), true),
        ]
    );
}

#[test]
fn test_unknown_panel_changes_nothing_and_stays_silent() {
    let (mut session, announcer, render) = recorded_session();
    for panel in faq_panels() {
        session.register_panel(panel);
    }
    session.toggle_accordion_panel("faq-2");
    let announcements_before = announcer.messages().len();
    let renders_before = render.accordion_events().len();

    let deltas = session.toggle_accordion_panel("not-a-panel");

    assert!(deltas.is_empty());
    assert!(session.accordion().is_expanded("faq-2"));
    assert_eq!(announcer.messages().len(), announcements_before);
    assert_eq!(render.accordion_events().len(), renders_before);
}
