mod catalog;
mod ids;
mod points;
mod question;
mod session;
mod topic;

pub use catalog::{Catalog, CatalogError};
pub use ids::{ParseIdError, QuestionId, TopicId};
pub use points::{DrawMode, GroupQuota, POINT_VALUES, PointGroup, Points};
pub use question::{Question, QuestionDraft, QuestionError};
pub use session::{DrawRecord, SessionSummary, SessionSummaryError};
pub use topic::{Topic, TopicError};
