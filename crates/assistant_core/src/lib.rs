//! assistant_core - Core types and boundary traits for the assistant widget
//!
//! This crate provides the foundational types used across the widget crates:
//! - `transcript` - ConversationEntry and the append-only Transcript
//! - `sinks` - Announcer and RenderSink boundary traits
//! - `config` - AssistantConfig loading (file + environment)
//! - `validate` - form field validation rules

pub mod config;
pub mod sinks;
pub mod transcript;
pub mod validate;

// Re-export commonly used types
pub use config::{AssistantConfig, ConfigError};
pub use sinks::{Announcer, NullAnnouncer, NullRenderSink, RenderSink};
pub use transcript::{ConversationEntry, Sender, Transcript};
pub use validate::{validate_field, FieldKind, FieldSpec, FieldVerdict};
