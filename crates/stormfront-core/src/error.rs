//! Campaign error types.
//!
//! Almost every "failure" in the campaign core is a silent gating skip or
//! an expected inventory exhaustion. The variants here cover the remaining
//! class: invalid-state operations a correct caller never performs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// An event was initiated or resolved that is not queued for this turn.
    #[error("event is not queued for the current turn")]
    EventNotQueued,
    /// A control point id did not resolve against the theater.
    #[error("unknown control point id {0}")]
    UnknownControlPoint(u32),
}
