use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::answer::models::Answer;

pub mod create_answer;

pub use create_answer::create_answer;

/// Answer as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResponseData {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Answer> for AnswerResponseData {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.0,
            question_id: answer.question_id.0,
            content: answer.content.as_str().to_string(),
            author_id: answer.author_id.0,
            created_at: answer.created_at,
        }
    }
}
