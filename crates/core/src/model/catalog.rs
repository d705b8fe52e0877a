use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{QuestionId, TopicId};
use crate::model::points::{POINT_VALUES, Points};
use crate::model::question::Question;
use crate::model::topic::Topic;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no topics")]
    NoTopics,

    #[error("duplicate topic id: {0}")]
    DuplicateTopic(TopicId),

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("question {question} references unknown topic {topic}")]
    UnknownTopic { question: QuestionId, topic: TopicId },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable set of topics and questions a session draws from.
///
/// Topic and question order is preserved from the source; board projections
/// list topics in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
    questions: Vec<Question>,
    rules: Option<String>,
    version: Option<String>,
}

impl Catalog {
    /// Build a catalog, checking referential integrity.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for an empty topic list, duplicate ids, or a
    /// question pointing at a topic the catalog does not define.
    pub fn new(topics: Vec<Topic>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        if topics.is_empty() {
            return Err(CatalogError::NoTopics);
        }

        let mut topic_ids = HashSet::with_capacity(topics.len());
        for topic in &topics {
            if !topic_ids.insert(topic.id()) {
                return Err(CatalogError::DuplicateTopic(topic.id().clone()));
            }
        }

        let mut question_ids = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !question_ids.insert(question.id()) {
                return Err(CatalogError::DuplicateQuestion(question.id().clone()));
            }
            if !topic_ids.contains(question.topic_id()) {
                return Err(CatalogError::UnknownTopic {
                    question: question.id().clone(),
                    topic: question.topic_id().clone(),
                });
            }
        }

        Ok(Self {
            topics,
            questions,
            rules: None,
            version: None,
        })
    }

    /// Attach the rules text shown to players. Blank text is dropped.
    #[must_use]
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = non_blank(rules.into());
        self
    }

    /// Attach the content version label. Blank text is dropped.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = non_blank(version.into());
        self
    }

    #[must_use]
    pub fn rules(&self) -> Option<&str> {
        self.rules.as_deref()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// The fixed ordered set of valid point values.
    #[must_use]
    pub fn point_values(&self) -> &'static [Points] {
        &POINT_VALUES
    }

    /// Questions of one (topic, points) cell, in catalog order.
    pub fn cell<'a>(
        &'a self,
        topic_id: &'a TopicId,
        points: Points,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions
            .iter()
            .filter(move |q| q.topic_id() == topic_id && q.points() == points)
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
