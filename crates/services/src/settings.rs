//! Settings collaborator supplying the allowed-topic filter.

use quiz_core::settings::TopicFilter;

/// Capability interface for whoever owns the instructor's topic selection.
pub trait TopicSettings: Send + Sync {
    /// Filter to apply to newly started sessions.
    fn allowed_topics(&self) -> TopicFilter;
}

/// No settings collaborator: every topic is allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllTopics;

impl TopicSettings for AllTopics {
    fn allowed_topics(&self) -> TopicFilter {
        TopicFilter::All
    }
}

/// A filter fixed at construction (e.g. parsed from configuration).
#[derive(Debug, Clone, Default)]
pub struct FixedTopics(pub TopicFilter);

impl TopicSettings for FixedTopics {
    fn allowed_topics(&self) -> TopicFilter {
        self.0.clone()
    }
}
