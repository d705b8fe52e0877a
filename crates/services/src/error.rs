//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{PointGroup, Points, SessionSummaryError, TopicId};

/// Why a draw produced no question.
///
/// Every variant is an expected, recoverable outcome: the session is left
/// exactly as it was before the call. Callers that only need "question or
/// nothing" can use `.ok()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrawError {
    #[error("unknown topic: {0}")]
    UnknownTopic(TopicId),
    #[error("{0} is not a catalog point value")]
    UnknownPoints(Points),
    #[error("session already finished")]
    Finished,
    #[error("pick quota reached for {0}")]
    PickQuotaReached(PointGroup),
    #[error("risk quota reached for {0}")]
    RiskQuotaReached(PointGroup),
    #[error("no questions left for {topic} at {points}")]
    PoolExhausted { topic: TopicId, points: Points },
    #[error("a question is already open")]
    QuestionOpen,
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session is not finished yet")]
    NotFinished,
    #[error("last question has not been resolved")]
    QuestionOpen,
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}

/// Errors emitted while loading a question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogSourceError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] quiz_core::Error),
}
