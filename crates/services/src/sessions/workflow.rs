use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::Catalog;

use super::service::{QuizSession, SessionConfig};
use crate::random::{SeededRandom, ThreadRandom};
use crate::settings::{AllTopics, TopicSettings};

/// Starts sessions over a shared catalog, wiring in settings, time and randomness.
#[derive(Clone)]
pub struct QuizService {
    catalog: Arc<Catalog>,
    settings: Arc<dyn TopicSettings>,
    clock: Clock,
    seed: Option<u64>,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            settings: Arc::new(AllTopics),
            clock: Clock::default(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: Arc<dyn TopicSettings>) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Seed question selection so runs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Start a new session for `team`, reading the topic filter from settings now.
    #[must_use]
    pub fn start_session(&self, team: &str) -> QuizSession {
        let config = SessionConfig::new(team).with_filter(self.settings.allowed_topics());
        let session =
            QuizSession::new(Arc::clone(&self.catalog), config).with_clock(self.clock);
        match self.seed {
            Some(seed) => session.with_random(SeededRandom::new(seed)),
            None => session.with_random(ThreadRandom),
        }
    }
}
