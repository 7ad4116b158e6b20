use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::answer::errors::AnswerContentError;
use crate::domain::question::models::QuestionId;
use crate::domain::user::models::UserId;

/// Answer unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerId(pub i64);

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Answer entity, always attached to a question.
#[derive(Debug, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub content: AnswerContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Answer body value object.
#[derive(Debug, Clone)]
pub struct AnswerContent(String);

impl AnswerContent {
    /// Create new validated content.
    ///
    /// # Errors
    /// * `Empty` - Content is the empty string
    pub fn new(content: String) -> Result<Self, AnswerContentError> {
        if content.is_empty() {
            Err(AnswerContentError::Empty)
        } else {
            Ok(Self(content))
        }
    }

    /// Get content as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to post an answer to a question.
#[derive(Debug)]
pub struct CreateAnswerCommand {
    pub question_id: QuestionId,
    pub content: AnswerContent,
    pub author_id: UserId,
}
