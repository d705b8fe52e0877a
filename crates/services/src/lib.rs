#![forbid(unsafe_code)]

pub mod catalog_source;
pub mod error;
pub mod random;
pub mod sessions;
pub mod settings;

pub use quiz_core::Clock;
pub use sessions as session;

pub use catalog_source::{load_catalog_file, load_catalog_json};
pub use error::{CatalogSourceError, DrawError, SessionError};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use sessions::{BoardView, QuestionReveal, QuizService, QuizSession, SessionConfig};
pub use settings::{AllTopics, FixedTopics, TopicSettings};
