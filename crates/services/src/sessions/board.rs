//! Read-only board projection for the renderer.

use quiz_core::model::{GroupQuota, PointGroup, Points, TopicId};

use super::quota::GroupUsage;
use super::service::QuizSession;

/// Eligibility of one (topic, points) card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub topic_id: TopicId,
    pub points: Points,
    pub remaining: usize,
    pub safe_enabled: bool,
    pub risk_enabled: bool,
}

impl CardState {
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !self.safe_enabled && !self.risk_enabled
    }
}

/// One allowed topic within a group column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCards {
    pub topic_id: TopicId,
    pub topic_name: String,
    pub topic_color: String,
    pub cards: Vec<CardState>,
}

impl TopicCards {
    /// Questions left across this topic's cards in the column.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.iter().map(|c| c.remaining).sum()
    }
}

/// One group column: quota usage plus a card row per allowed topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupColumn {
    pub group: PointGroup,
    pub usage: GroupUsage,
    pub quota: GroupQuota,
    pub topics: Vec<TopicCards>,
}

/// Whole-topic summary across every point value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub topic_id: TopicId,
    pub topic_name: String,
    pub topic_color: String,
    pub remaining: usize,
}

impl TopicSummary {
    /// No question of this topic is left to draw.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.remaining == 0
    }
}

/// Presentation-agnostic snapshot of what can be drawn right now.
///
/// Recompute after every draw or resolution; it holds no reference to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub drawn: u8,
    pub is_finished: bool,
    pub has_open_question: bool,
    pub raw_score: i64,
    pub topics: Vec<TopicSummary>,
    pub columns: Vec<GroupColumn>,
}

impl BoardView {
    #[must_use]
    pub fn topic(&self, topic_id: &TopicId) -> Option<&TopicSummary> {
        self.topics.iter().find(|t| &t.topic_id == topic_id)
    }

    /// Questions left across every listed topic.
    #[must_use]
    pub fn total_remaining(&self) -> usize {
        self.topics.iter().map(|t| t.remaining).sum()
    }

    #[must_use]
    pub fn card(&self, topic_id: &TopicId, points: Points) -> Option<&CardState> {
        let group = points.group()?;
        self.columns
            .iter()
            .find(|col| col.group == group)?
            .topics
            .iter()
            .find(|t| &t.topic_id == topic_id)?
            .cards
            .iter()
            .find(|c| c.points == points)
    }

    /// Cards offering at least one mode.
    pub fn enabled_cards(&self) -> impl Iterator<Item = &CardState> {
        self.columns
            .iter()
            .flat_map(|col| col.topics.iter())
            .flat_map(|t| t.cards.iter())
            .filter(|c| !c.is_disabled())
    }
}

impl QuizSession {
    /// Project the board for the topics the session's filter allows.
    #[must_use]
    pub fn board(&self) -> BoardView {
        let topics = self
            .catalog()
            .topics()
            .iter()
            .filter(|topic| self.topic_filter().allows(topic.id()))
            .map(|topic| TopicSummary {
                topic_id: topic.id().clone(),
                topic_name: topic.name().to_string(),
                topic_color: topic.color().to_string(),
                remaining: self.remaining_in_topic(topic.id()),
            })
            .collect();

        let columns = PointGroup::ALL
            .into_iter()
            .map(|group| GroupColumn {
                group,
                usage: self.ledger().usage(group),
                quota: group.quota(),
                topics: self
                    .catalog()
                    .topics()
                    .iter()
                    .filter(|topic| self.topic_filter().allows(topic.id()))
                    .map(|topic| TopicCards {
                        topic_id: topic.id().clone(),
                        topic_name: topic.name().to_string(),
                        topic_color: topic.color().to_string(),
                        cards: group
                            .points()
                            .map(|points| self.card_state(topic.id(), points))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        BoardView {
            drawn: self.total_drawn(),
            is_finished: self.is_finished(),
            has_open_question: self.open_question().is_some(),
            raw_score: self.raw_score(),
            topics,
            columns,
        }
    }

    fn card_state(&self, topic_id: &TopicId, points: Points) -> CardState {
        let remaining = self.remaining(topic_id, points);
        let safe_enabled = remaining > 0 && self.can_pick(points);
        CardState {
            topic_id: topic_id.clone(),
            points,
            remaining,
            safe_enabled,
            risk_enabled: safe_enabled && self.can_risk(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::model::{Catalog, DrawMode, QuestionDraft, QuestionId, Topic};

    use super::*;
    use crate::random::ScriptedRandom;
    use crate::sessions::SessionConfig;

    fn build_catalog() -> Arc<Catalog> {
        let topics = ["pi", "logic"]
            .into_iter()
            .map(|id| Topic::new(TopicId::new(id), id, "#a78bfa").unwrap())
            .collect();
        let questions = ["pi", "logic"]
            .into_iter()
            .flat_map(|topic| {
                [100, 200, 300, 400, 500].into_iter().map(move |points| {
                    QuestionDraft {
                        id: QuestionId::new(format!("{topic}_{points}")),
                        topic_id: TopicId::new(topic),
                        points: Points::new(points),
                        text: "q".into(),
                        answer: "a".into(),
                        tags: Vec::new(),
                    }
                    .validate()
                    .unwrap()
                })
            })
            .collect();
        Arc::new(Catalog::new(topics, questions).unwrap())
    }

    fn build_session(config: SessionConfig) -> QuizSession {
        QuizSession::new(build_catalog(), config).with_random(ScriptedRandom::first())
    }

    #[test]
    fn fresh_board_enables_everything() {
        let board = build_session(SessionConfig::new("T")).board();
        assert_eq!(board.columns.len(), 3);
        assert_eq!(board.enabled_cards().count(), 10);
        let column_b = &board.columns[1];
        assert_eq!(column_b.group, PointGroup::B);
        assert_eq!(column_b.topics.len(), 2);
        assert_eq!(column_b.topics[0].cards.len(), 2);
        assert_eq!(column_b.topics[0].remaining(), 2);
    }

    #[test]
    fn board_only_lists_allowed_topics() {
        let config = SessionConfig::new("T").with_allowed_topics(Some(vec![TopicId::new("logic")]));
        let board = build_session(config).board();
        for column in &board.columns {
            let ids: Vec<_> = column.topics.iter().map(|t| t.topic_id.as_str()).collect();
            assert_eq!(ids, vec!["logic"]);
        }
    }

    #[test]
    fn exhausted_cell_and_spent_quotas_disable_cards() {
        let mut session = build_session(SessionConfig::new("T"));
        let pi = TopicId::new("pi");
        session
            .pick_question(&pi, Points::new(100), DrawMode::Risk)
            .unwrap();
        session.resolve_answer(true);

        let board = session.board();
        let card = board.card(&pi, Points::new(100)).unwrap();
        assert_eq!(card.remaining, 0);
        assert!(card.is_disabled());
        let other = board.card(&TopicId::new("logic"), Points::new(100)).unwrap();
        assert!(other.safe_enabled && other.risk_enabled);

        session
            .pick_question(&pi, Points::new(200), DrawMode::Risk)
            .unwrap();
        session.resolve_answer(false);

        let board = session.board();
        let card = board.card(&TopicId::new("logic"), Points::new(200)).unwrap();
        assert_eq!(card.remaining, 1);
        assert!(!card.safe_enabled && !card.risk_enabled);
        assert_eq!(board.columns[0].usage.drawn, 2);
        assert_eq!(board.raw_score, 50);
    }

    #[test]
    fn topic_summary_tracks_whole_topic_exhaustion() {
        let mut session = build_session(SessionConfig::new("T"));
        let pi = TopicId::new("pi");
        assert_eq!(session.board().topic(&pi).unwrap().remaining, 5);
        assert_eq!(session.board().total_remaining(), 10);

        for points in [100, 300, 400, 500, 200] {
            session
                .pick_question(&pi, Points::new(points), DrawMode::Safe)
                .unwrap();
            session.resolve_answer(true);
        }

        let board = session.board();
        let summary = board.topic(&pi).unwrap();
        assert_eq!(summary.remaining, 0);
        assert!(summary.is_disabled());
        let logic = board.topic(&TopicId::new("logic")).unwrap();
        assert_eq!(logic.remaining, 5);
        assert!(!logic.is_disabled());
        assert_eq!(board.total_remaining(), 5);
    }

    #[test]
    fn topic_summaries_follow_the_filter() {
        let config = SessionConfig::new("T").with_allowed_topics(Some(vec![TopicId::new("pi")]));
        let board = build_session(config).board();
        let ids: Vec<_> = board.topics.iter().map(|t| t.topic_id.as_str()).collect();
        assert_eq!(ids, vec!["pi"]);
        assert!(board.topic(&TopicId::new("logic")).is_none());
    }

    #[test]
    fn risk_disabled_once_risk_quota_is_spent() {
        let mut session = build_session(SessionConfig::new("T"));
        for (topic, points) in [("pi", 300), ("logic", 300)] {
            session
                .pick_question(&TopicId::new(topic), Points::new(points), DrawMode::Risk)
                .unwrap();
            session.resolve_answer(true);
        }

        let board = session.board();
        let card = board.card(&TopicId::new("pi"), Points::new(400)).unwrap();
        assert!(card.safe_enabled);
        assert!(!card.risk_enabled);
    }
}
