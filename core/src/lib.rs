//! # Matchday Core
//!
//! Domain types, connector traits and the error taxonomy shared by the
//! Matchday relay service. Connectors implement the traits defined here and
//! the HTTP presentation layer consumes them without knowing which upstream
//! provider sits behind each one.

pub mod chat;
pub mod errors;
pub mod fixtures;
pub mod traits;

// Re-export commonly used types and traits
pub use chat::{
    ChatMessage, ChatRequest, ChatResponse, Completion, CompletionMetadata, CompletionRequest,
};
pub use errors::{CoreError, FixtureError, LlmError, PresentationError};
pub use fixtures::{FixtureRecord, FixtureScores, MatchPrediction};
pub use traits::{FixtureSource, LlmConnector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chat::*;
    pub use crate::errors::*;
    pub use crate::fixtures::*;
    pub use crate::traits::*;
    pub use async_trait::async_trait;
}
