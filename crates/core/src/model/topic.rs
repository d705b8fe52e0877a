use thiserror::Error;

use crate::model::ids::TopicId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic id cannot be empty")]
    EmptyId,

    #[error("topic name cannot be empty")]
    EmptyName,

    #[error("topic color cannot be empty")]
    EmptyColor,
}

/// A named category of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    name: String,
    color: String,
}

impl Topic {
    /// Create a validated topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicError` if the id, name or color is blank.
    pub fn new(
        id: TopicId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, TopicError> {
        if id.as_str().trim().is_empty() {
            return Err(TopicError::EmptyId);
        }
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TopicError::EmptyName);
        }
        let color = color.into().trim().to_string();
        if color.is_empty() {
            return Err(TopicError::EmptyColor);
        }
        Ok(Self { id, name, color })
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color, as supplied by the catalog (e.g. `"#60a5fa"`).
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_name_is_trimmed() {
        let topic = Topic::new(TopicId::new("pi"), "  Pi & circles ", "#60a5fa").unwrap();
        assert_eq!(topic.name(), "Pi & circles");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            Topic::new(TopicId::new(" "), "x", "#fff").unwrap_err(),
            TopicError::EmptyId
        );
        assert_eq!(
            Topic::new(TopicId::new("pi"), "  ", "#fff").unwrap_err(),
            TopicError::EmptyName
        );
        assert_eq!(
            Topic::new(TopicId::new("pi"), "Pi", "").unwrap_err(),
            TopicError::EmptyColor
        );
    }
}
