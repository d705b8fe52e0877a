use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{DrawMode, Points, QuestionId, TopicId};
use crate::scoring::{QuizResult, SESSION_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("expected {expected} draws, got {len}")]
    WrongDrawCount { expected: u8, len: usize },

    #[error("draw of {0} was never resolved")]
    Unresolved(QuestionId),
}

/// One successful draw and, once resolved, its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    pub question_id: QuestionId,
    pub topic_id: TopicId,
    pub points: Points,
    pub mode: DrawMode,
    /// `None` while the question is still open.
    pub correct: Option<bool>,
    /// Raw score change applied at resolution.
    pub delta: i64,
}

/// Aggregate summary for a finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    team: String,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    draws: u8,
    correct: u8,
    risk_draws: u8,
    result: QuizResult,
}

impl SessionSummary {
    /// Build a summary from the full draw history of a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `finished_at` is before `started_at`.
    /// Returns `SessionSummaryError::WrongDrawCount` unless exactly one session's worth of draws is given.
    /// Returns `SessionSummaryError::Unresolved` if any draw is still open.
    pub fn from_records(
        team: impl Into<String>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        records: &[DrawRecord],
    ) -> Result<Self, SessionSummaryError> {
        if finished_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if records.len() != usize::from(SESSION_LENGTH) {
            return Err(SessionSummaryError::WrongDrawCount {
                expected: SESSION_LENGTH,
                len: records.len(),
            });
        }

        let mut correct = 0_u8;
        let mut risk_draws = 0_u8;
        let mut raw = 0_i64;
        for record in records {
            match record.correct {
                None => return Err(SessionSummaryError::Unresolved(record.question_id.clone())),
                Some(true) => correct += 1,
                Some(false) => {}
            }
            if record.mode.is_risk() {
                risk_draws += 1;
            }
            raw += record.delta;
        }

        Ok(Self {
            team: team.into(),
            started_at,
            finished_at,
            draws: SESSION_LENGTH,
            correct,
            risk_draws,
            result: QuizResult::from_raw(raw),
        })
    }

    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn draws(&self) -> u8 {
        self.draws
    }

    #[must_use]
    pub fn correct(&self) -> u8 {
        self.correct
    }

    #[must_use]
    pub fn risk_draws(&self) -> u8 {
        self.risk_draws
    }

    #[must_use]
    pub fn result(&self) -> &QuizResult {
        &self.result
    }
}
