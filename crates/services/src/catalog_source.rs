//! JSON catalog documents.

use std::path::Path;

use serde::Deserialize;

use quiz_core::model::{Catalog, Points, QuestionDraft, QuestionId, Topic, TopicId};

use crate::error::CatalogSourceError;

/// Persisted shape of a topic.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicRecord {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Persisted shape of a question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub topic_id: String,
    pub points: u32,
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Top-level catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub rules: Option<String>,
    pub topics: Vec<TopicRecord>,
    pub questions: Vec<QuestionRecord>,
}

impl CatalogDocument {
    /// Convert the records into a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `quiz_core::Error` if any topic, question or cross-reference is invalid.
    pub fn into_catalog(self) -> Result<Catalog, quiz_core::Error> {
        let topics = self
            .topics
            .into_iter()
            .map(|t| Topic::new(TopicId::new(t.id), t.name, t.color))
            .collect::<Result<Vec<_>, _>>()?;
        let questions = self
            .questions
            .into_iter()
            .map(|q| {
                QuestionDraft {
                    id: QuestionId::new(q.id),
                    topic_id: TopicId::new(q.topic_id),
                    points: Points::new(q.points),
                    text: q.question,
                    answer: q.answer,
                    tags: q.tags,
                }
                .validate()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut catalog = Catalog::new(topics, questions)?;
        if let Some(rules) = self.rules {
            catalog = catalog.with_rules(rules);
        }
        if let Some(version) = self.version {
            catalog = catalog.with_version(version);
        }
        Ok(catalog)
    }
}

/// Parse and validate a catalog from JSON text.
///
/// # Errors
///
/// Returns `CatalogSourceError::Parse` for malformed JSON and
/// `CatalogSourceError::Invalid` for content that fails validation.
pub fn load_catalog_json(json: &str) -> Result<Catalog, CatalogSourceError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    Ok(document.into_catalog()?)
}

/// Read a catalog document from disk.
///
/// # Errors
///
/// Returns `CatalogSourceError::Io` if the file cannot be read, otherwise as
/// [`load_catalog_json`].
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogSourceError> {
    let json = std::fs::read_to_string(path)?;
    load_catalog_json(&json)
}
