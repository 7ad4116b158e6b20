use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::question::models::Question;

pub mod create_question;
pub mod get_question;
pub mod list_questions;

pub use create_question::create_question;
pub use get_question::get_question;
pub use list_questions::list_questions;

/// Question as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResponseData {
    pub id: i64,
    pub subject: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Question> for QuestionResponseData {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.0,
            subject: question.subject.as_str().to_string(),
            content: question.content.as_str().to_string(),
            author_id: question.author_id.0,
            created_at: question.created_at,
        }
    }
}
