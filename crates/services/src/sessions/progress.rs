use quiz_core::model::{GroupQuota, PointGroup};
use quiz_core::scoring::SESSION_LENGTH;

use super::quota::GroupUsage;
use super::service::QuizSession;

/// Usage of one group against its quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupProgress {
    pub group: PointGroup,
    pub usage: GroupUsage,
    pub quota: GroupQuota,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub drawn: u8,
    pub session_length: u8,
    pub remaining_draws: u8,
    pub is_finished: bool,
    pub has_open_question: bool,
    pub groups: [GroupProgress; 3],
}

impl QuizSession {
    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let drawn = self.total_drawn();
        SessionProgress {
            drawn,
            session_length: SESSION_LENGTH,
            remaining_draws: SESSION_LENGTH.saturating_sub(drawn),
            is_finished: self.is_finished(),
            has_open_question: self.open_question().is_some(),
            groups: PointGroup::ALL.map(|group| GroupProgress {
                group,
                usage: self.ledger().usage(group),
                quota: group.quota(),
            }),
        }
    }
}
