//! dialogue_engine - Intent classification and canned responses
//!
//! Classifies free-text user messages into a fixed set of intents via
//! case-insensitive substring matching over an ordered rule table, and
//! returns the pre-authored response for the first matching rule. No
//! language understanding happens here; the table order encodes priority.

mod engine;
mod rules;

pub use engine::{Classification, DialogueEngine};
pub use rules::{IntentRule, RuleTable, FALLBACK_INTENT_ID};
