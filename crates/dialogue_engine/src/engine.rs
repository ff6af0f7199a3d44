//! Classification engine
//!
//! A pure function of (message, rule table). Determinism is part of the
//! contract: the same message against the same table always yields the
//! same classification.

use assistant_core::{ConversationEntry, Transcript};
use serde::{Deserialize, Serialize};

use crate::rules::{RuleTable, FALLBACK_INTENT_ID};

/// Result of classifying one message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub intent_id: String,
    pub response: String,
}

/// Classifies messages against an ordered rule table.
#[derive(Debug, Clone, Default)]
pub struct DialogueEngine {
    table: RuleTable,
}

impl DialogueEngine {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Classify a message: lowercase it, scan the table in order, return the
    /// first rule whose trigger occurs as a substring, else the fallback.
    pub fn classify(&self, message: &str) -> Classification {
        let normalized = message.to_lowercase();

        for rule in self.table.rules() {
            if rule.matches(&normalized) {
                tracing::debug!(intent = %rule.id, "message classified");
                return Classification {
                    intent_id: rule.id.clone(),
                    response: rule.response.clone(),
                };
            }
        }

        tracing::debug!("no rule matched, using fallback");
        Classification {
            intent_id: FALLBACK_INTENT_ID.to_string(),
            response: self.table.fallback().to_string(),
        }
    }

    /// Classify and record both sides of the exchange on the transcript.
    ///
    /// Blank or whitespace-only input is a no-op: nothing is appended and
    /// `None` is returned. Otherwise the user entry is appended first, then
    /// the assistant entry, preserving arrival order.
    pub fn classify_and_respond(
        &self,
        message: &str,
        transcript: &mut Transcript,
    ) -> Option<Classification> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        transcript.push(ConversationEntry::user(message));
        let classification = self.classify(message);
        transcript.push(ConversationEntry::assistant(classification.response.clone()));
        Some(classification)
    }
}
