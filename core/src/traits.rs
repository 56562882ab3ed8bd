//! Connector traits implemented by the upstream adapters

use crate::chat::{Completion, CompletionRequest};
use crate::errors::{FixtureError, LlmError};
use crate::fixtures::FixtureRecord;
use async_trait::async_trait;

/// Trait for Large Language Model connectors
#[async_trait]
pub trait LlmConnector: Send + Sync {
    /// Generate a completion for the given conversation.
    ///
    /// Exactly one upstream call is made; failures are returned, never retried.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError>;
}

/// Trait for sports-data providers
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Fetch today's fixtures in provider order.
    ///
    /// A payload without a fixture list yields an empty vector. A record
    /// missing any field we read fails the whole call.
    async fn fixtures_today(&self) -> Result<Vec<FixtureRecord>, FixtureError>;
}
