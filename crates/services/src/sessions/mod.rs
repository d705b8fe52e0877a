mod board;
mod progress;
mod quota;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{DrawError, SessionError};
pub use board::{BoardView, CardState, GroupColumn, TopicCards, TopicSummary};
pub use progress::{GroupProgress, SessionProgress};
pub use quota::{GroupUsage, QuotaLedger};
pub use service::{
    AnswerOutcome, DEFAULT_TEAM, OpenQuestion, QuestionReveal, QuizSession, SessionConfig,
};
pub use workflow::QuizService;
