use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{
    Catalog, DrawMode, DrawRecord, PointGroup, Points, QuestionId, SessionSummary, TopicId,
};
use quiz_core::scoring::{QuizResult, SESSION_LENGTH, score_delta};
use quiz_core::settings::TopicFilter;
use tracing::{debug, info};

use super::quota::QuotaLedger;
use crate::error::{DrawError, SessionError};
use crate::random::{RandomSource, ThreadRandom};

/// Team label used when none (or only whitespace) is given.
pub const DEFAULT_TEAM: &str = "Team";

//
// ─── CONFIG & PAYLOADS ─────────────────────────────────────────────────────────
//

/// Configuration a session is (re)initialized with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub team_name: String,
    pub topic_filter: TopicFilter,
}

impl SessionConfig {
    #[must_use]
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            topic_filter: TopicFilter::All,
        }
    }

    /// Restrict the board to these topics; `None` or an empty list allows all.
    #[must_use]
    pub fn with_allowed_topics(mut self, ids: Option<Vec<TopicId>>) -> Self {
        self.topic_filter = TopicFilter::from_ids(ids);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: TopicFilter) -> Self {
        self.topic_filter = filter.normalized();
        self
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.team_name.trim();
        self.team_name = if trimmed.is_empty() {
            DEFAULT_TEAM.to_string()
        } else {
            trimmed.to_string()
        };
        self.topic_filter = self.topic_filter.normalized();
        self
    }
}

/// Payload handed to the renderer after a successful draw.
///
/// The answer is included up front; keeping it hidden until revealed is the
/// renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReveal {
    pub question_id: QuestionId,
    pub topic_id: TopicId,
    pub topic_name: String,
    pub topic_color: String,
    pub points: Points,
    pub mode: DrawMode,
    pub question_text: String,
    pub answer_text: String,
}

/// The drawn-but-unresolved question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenQuestion {
    pub question_id: QuestionId,
    pub topic_id: TopicId,
    pub points: Points,
    pub mode: DrawMode,
}

/// Result of resolving the open question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub delta: i64,
    pub raw_score: i64,
    pub is_finished: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One team's quiz session over a shared, immutable catalog.
///
/// All mutation goes through [`QuizSession::pick_question`] and
/// [`QuizSession::resolve_answer`]; a draw either commits every counter
/// update together or leaves the session untouched.
pub struct QuizSession {
    catalog: Arc<Catalog>,
    config: SessionConfig,
    consumed: HashSet<QuestionId>,
    ledger: QuotaLedger,
    raw_score: i64,
    open: Option<OpenQuestion>,
    history: Vec<DrawRecord>,
    random: Box<dyn RandomSource + Send>,
    clock: Clock,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: SessionConfig) -> Self {
        let clock = Clock::default();
        let mut session = Self {
            catalog,
            config: SessionConfig::default(),
            consumed: HashSet::new(),
            ledger: QuotaLedger::default(),
            raw_score: 0,
            open: None,
            history: Vec::new(),
            random: Box::new(ThreadRandom),
            clock,
            started_at: clock.now(),
            finished_at: None,
        };
        session.init(config);
        session
    }

    #[must_use]
    pub fn with_random(mut self, random: impl RandomSource + Send + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.started_at = clock.now();
        self
    }

    /// Discard all progress and start over with `config`.
    pub fn init(&mut self, config: SessionConfig) {
        self.config = config.normalized();
        self.consumed.clear();
        self.ledger = QuotaLedger::default();
        self.raw_score = 0;
        self.open = None;
        self.history.clear();
        self.started_at = self.clock.now();
        self.finished_at = None;
        info!(
            team = %self.config.team_name,
            restricted = !self.config.topic_filter.is_unrestricted(),
            "quiz session initialized"
        );
    }

    /// Start over with the team label and topic filter currently in effect.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        self.init(config);
    }

    // ─── Queries ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn team(&self) -> &str {
        &self.config.team_name
    }

    #[must_use]
    pub fn topic_filter(&self) -> &TopicFilter {
        &self.config.topic_filter
    }

    #[must_use]
    pub fn raw_score(&self) -> i64 {
        self.raw_score
    }

    #[must_use]
    pub fn total_drawn(&self) -> u8 {
        self.ledger.total_drawn()
    }

    #[must_use]
    pub fn ledger(&self) -> &QuotaLedger {
        &self.ledger
    }

    #[must_use]
    pub fn open_question(&self) -> Option<&OpenQuestion> {
        self.open.as_ref()
    }

    #[must_use]
    pub fn is_consumed(&self, id: &QuestionId) -> bool {
        self.consumed.contains(id)
    }

    #[must_use]
    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.ledger.total_drawn() >= SESSION_LENGTH
    }

    /// True if the session is running and the group of `points` has picks left.
    #[must_use]
    pub fn can_pick(&self, points: Points) -> bool {
        !self.is_finished()
            && points
                .group()
                .is_some_and(|group| self.ledger.has_pick_left(group))
    }

    /// True if the group of `points` has risk draws left. Independent of `can_pick`.
    #[must_use]
    pub fn can_risk(&self, points: Points) -> bool {
        points
            .group()
            .is_some_and(|group| self.ledger.has_risk_left(group))
    }

    /// Unconsumed questions left in one (topic, points) cell.
    #[must_use]
    pub fn remaining(&self, topic_id: &TopicId, points: Points) -> usize {
        self.catalog
            .cell(topic_id, points)
            .filter(|q| !self.consumed.contains(q.id()))
            .count()
    }

    /// Unconsumed questions left in a topic across every point value.
    #[must_use]
    pub fn remaining_in_topic(&self, topic_id: &TopicId) -> usize {
        self.catalog
            .questions()
            .iter()
            .filter(|q| q.topic_id() == topic_id && !self.consumed.contains(q.id()))
            .count()
    }

    /// Normalized result for the current raw score. Not gated on `is_finished`.
    #[must_use]
    pub fn result(&self) -> QuizResult {
        QuizResult::from_raw(self.raw_score)
    }

    /// Summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the last draw and
    /// `SessionError::QuestionOpen` while the last question is unresolved.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let Some(finished_at) = self.finished_at else {
            return Err(SessionError::NotFinished);
        };
        if self.open.is_some() {
            return Err(SessionError::QuestionOpen);
        }
        Ok(SessionSummary::from_records(
            self.config.team_name.clone(),
            self.started_at,
            finished_at,
            &self.history,
        )?)
    }

    // ─── Mutations ─────────────────────────────────────────────────────────────

    /// Draw a random unconsumed question from the (topic, points) cell.
    ///
    /// The allowed-topic filter is not consulted here; it only shapes the board.
    ///
    /// # Errors
    ///
    /// Returns `DrawError` if a question is already open, the topic or point
    /// value is unknown, the session is finished, a group quota is used up,
    /// or the cell has no questions left. The session is unchanged in every
    /// error case.
    pub fn pick_question(
        &mut self,
        topic_id: &TopicId,
        points: Points,
        mode: DrawMode,
    ) -> Result<QuestionReveal, DrawError> {
        self.draw(topic_id, points, mode).inspect_err(|err| {
            debug!(topic = %topic_id, %points, %mode, reason = %err, "draw rejected");
        })
    }

    fn draw(
        &mut self,
        topic_id: &TopicId,
        points: Points,
        mode: DrawMode,
    ) -> Result<QuestionReveal, DrawError> {
        if self.open.is_some() {
            return Err(DrawError::QuestionOpen);
        }
        let catalog = Arc::clone(&self.catalog);
        let topic = catalog
            .topic(topic_id)
            .ok_or_else(|| DrawError::UnknownTopic(topic_id.clone()))?;
        let group = points.group().ok_or(DrawError::UnknownPoints(points))?;
        self.check_quota(group, mode)?;

        let pool: Vec<_> = catalog
            .cell(topic_id, points)
            .filter(|q| !self.consumed.contains(q.id()))
            .collect();
        if pool.is_empty() {
            return Err(DrawError::PoolExhausted {
                topic: topic_id.clone(),
                points,
            });
        }
        let index = self.random.pick_index(pool.len()).min(pool.len() - 1);
        let question = pool[index];

        // Commit point: nothing above this line mutates the session.
        self.consumed.insert(question.id().clone());
        self.ledger.record(group, mode.is_risk());
        self.open = Some(OpenQuestion {
            question_id: question.id().clone(),
            topic_id: topic_id.clone(),
            points,
            mode,
        });
        self.history.push(DrawRecord {
            question_id: question.id().clone(),
            topic_id: topic_id.clone(),
            points,
            mode,
            correct: None,
            delta: 0,
        });
        if self.is_finished() {
            self.finished_at = Some(self.clock.now());
            info!(team = %self.config.team_name, "last question drawn");
        }

        Ok(QuestionReveal {
            question_id: question.id().clone(),
            topic_id: topic_id.clone(),
            topic_name: topic.name().to_string(),
            topic_color: topic.color().to_string(),
            points,
            mode,
            question_text: question.text().to_string(),
            answer_text: question.answer().to_string(),
        })
    }

    fn check_quota(&self, group: PointGroup, mode: DrawMode) -> Result<(), DrawError> {
        if self.is_finished() {
            return Err(DrawError::Finished);
        }
        if !self.ledger.has_pick_left(group) {
            return Err(DrawError::PickQuotaReached(group));
        }
        if mode.is_risk() && !self.ledger.has_risk_left(group) {
            return Err(DrawError::RiskQuotaReached(group));
        }
        Ok(())
    }

    /// Score and close the open question. Returns `None` if nothing is open.
    pub fn resolve_answer(&mut self, correct: bool) -> Option<AnswerOutcome> {
        let open = self.open.take()?;
        let delta = score_delta(open.points, open.mode, correct);
        self.raw_score += delta;

        if let Some(record) = self
            .history
            .iter_mut()
            .rev()
            .find(|r| r.question_id == open.question_id)
        {
            record.correct = Some(correct);
            record.delta = delta;
        }

        info!(
            question = %open.question_id,
            mode = %open.mode,
            correct,
            delta,
            raw_score = self.raw_score,
            "answer resolved"
        );

        Some(AnswerOutcome {
            delta,
            raw_score: self.raw_score,
            is_finished: self.is_finished(),
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("team", &self.config.team_name)
            .field("topic_filter", &self.config.topic_filter)
            .field("consumed_len", &self.consumed.len())
            .field("ledger", &self.ledger)
            .field("raw_score", &self.raw_score)
            .field("open", &self.open)
            .field("started_at", &self.started_at)
            .field("finished_at", &self.finished_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
