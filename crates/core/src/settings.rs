//! Allowed-topic filter configured by the instructor.

use thiserror::Error;

use crate::model::{Catalog, TopicId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicFilterError {
    #[error("at least one topic must stay enabled")]
    NothingAllowed,
}

/// Which topics a session offers on its board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopicFilter {
    #[default]
    All,
    Only(Vec<TopicId>),
}

impl TopicFilter {
    /// Engine-side normalization: absent or empty means unrestricted.
    #[must_use]
    pub fn from_ids(ids: Option<Vec<TopicId>>) -> Self {
        ids.map_or(Self::All, Self::Only).normalized()
    }

    /// Collapse an empty `Only` selection to `All`.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Only(ids) if ids.is_empty() => Self::All,
            other => other,
        }
    }

    #[must_use]
    pub fn allows(&self, topic_id: &TopicId) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Only(ids) => ids.contains(topic_id),
        }
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, TopicFilter::All)
    }

    /// Number of catalog topics this filter lets through.
    #[must_use]
    pub fn allowed_count(&self, catalog: &Catalog) -> usize {
        catalog
            .topics()
            .iter()
            .filter(|t| self.allows(t.id()))
            .count()
    }
}

/// Raw instructor selection, before it is checked against the catalog.
#[derive(Debug, Clone, Default)]
pub struct TopicFilterDraft {
    pub allowed: Option<Vec<String>>,
}

impl TopicFilterDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize against the catalog.
    ///
    /// Unknown ids are dropped and a selection covering every topic collapses
    /// to [`TopicFilter::All`].
    ///
    /// # Errors
    ///
    /// Returns `TopicFilterError::NothingAllowed` if a selection is present but
    /// names no catalog topic.
    pub fn validate(self, catalog: &Catalog) -> Result<TopicFilter, TopicFilterError> {
        let Some(raw) = self.allowed else {
            return Ok(TopicFilter::All);
        };

        let mut kept: Vec<TopicId> = Vec::new();
        for id in raw.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            let id = TopicId::new(id);
            if catalog.topic(&id).is_some() && !kept.contains(&id) {
                kept.push(id);
            }
        }

        if kept.is_empty() {
            return Err(TopicFilterError::NothingAllowed);
        }
        if kept.len() == catalog.topics().len() {
            return Ok(TopicFilter::All);
        }
        Ok(TopicFilter::Only(kept))
    }
}
