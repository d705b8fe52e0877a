use thiserror::Error;

use crate::model::{CatalogError, QuestionError, SessionSummaryError, TopicError};
use crate::settings::TopicFilterError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    TopicFilter(#[from] TopicFilterError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}
