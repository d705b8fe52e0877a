use thiserror::Error;

use crate::model::ids::{QuestionId, TopicId};
use crate::model::points::Points;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question text cannot be empty")]
    EmptyText,

    #[error("answer text cannot be empty")]
    EmptyAnswer,

    #[error("{0} is not one of the catalog point values")]
    UnknownPoints(Points),
}

/// Unvalidated question input, as read from a catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub topic_id: TopicId,
    pub points: Points,
    pub text: String,
    pub answer: String,
    pub tags: Vec<String>,
}

impl QuestionDraft {
    /// Validate the draft into an immutable question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for blank id/text/answer or an unknown point value.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.id.as_str().trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        if !self.points.is_known() {
            return Err(QuestionError::UnknownPoints(self.points));
        }
        let text = self.text.trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }
        let answer = self.answer.trim().to_string();
        if answer.is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        let tags = self
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Question {
            id: self.id,
            topic_id: self.topic_id,
            points: self.points,
            text,
            answer,
            tags,
        })
    }
}

/// A single catalog question. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    topic_id: TopicId,
    points: Points,
    text: String,
    answer: String,
    tags: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    #[must_use]
    pub fn points(&self) -> Points {
        self.points
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new("PI_100_001"),
            topic_id: TopicId::new("pi"),
            points: Points::new(100),
            text: "What is pi, in words?".into(),
            answer: "The ratio of a circle's circumference to its diameter.".into(),
            tags: vec![" definition ".into(), "  ".into()],
        }
    }

    #[test]
    fn validate_keeps_non_blank_tags() {
        let question = draft().validate().unwrap();
        assert_eq!(question.tags(), ["definition".to_string()]);
        assert_eq!(question.points(), Points::new(100));
    }

    #[test]
    fn validate_rejects_unknown_points() {
        let mut d = draft();
        d.points = Points::new(150);
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::UnknownPoints(Points::new(150))
        );
    }

    #[test]
    fn validate_rejects_blank_answer() {
        let mut d = draft();
        d.answer = "   ".into();
        assert_eq!(d.validate().unwrap_err(), QuestionError::EmptyAnswer);
    }
}
