//! Quick actions
//!
//! Named shortcuts mapped to pre-written queries. Invoking one is the same
//! as typing the query and sending it.

/// Look up the query text for a quick-action id. Unknown ids yield `None`.
pub fn quick_action_query(action_id: &str) -> Option<&'static str> {
    match action_id {
        "tracks" => Some("Tell me about the Vision 30 program tracks."),
        "apply" => Some("How can I apply for Vision 30?"),
        "eligibility" => Some("What are the eligibility criteria for Vision 30?"),
        "accessibility" => Some("What accessibility features does Vision 30 provide?"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions_have_queries() {
        for action in ["tracks", "apply", "eligibility", "accessibility"] {
            assert!(quick_action_query(action).is_some(), "missing {action}");
        }
    }

    #[test]
    fn test_unknown_action_is_none() {
        assert_eq!(quick_action_query("pricing"), None);
        assert_eq!(quick_action_query(""), None);
    }
}
