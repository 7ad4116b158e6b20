use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::question::errors::QuestionContentError;
use crate::domain::question::errors::QuestionIdError;
use crate::domain::question::errors::QuestionSubjectError;
use crate::domain::user::models::UserId;

/// Question unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(pub i64);

impl QuestionId {
    /// Parse a question ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer id
    pub fn from_string(s: &str) -> Result<Self, QuestionIdError> {
        s.parse::<i64>()
            .map(QuestionId)
            .map_err(|e| QuestionIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Question aggregate root entity.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub subject: QuestionSubject,
    pub content: QuestionContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Question subject value object.
///
/// Non-empty, at most 200 characters.
#[derive(Debug, Clone)]
pub struct QuestionSubject(String);

impl QuestionSubject {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated subject.
    ///
    /// # Errors
    /// * `Empty` - Subject is the empty string
    /// * `TooLong` - Subject exceeds 200 characters
    pub fn new(subject: String) -> Result<Self, QuestionSubjectError> {
        let length = subject.len();
        if length == 0 {
            Err(QuestionSubjectError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(QuestionSubjectError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(subject))
        }
    }

    /// Get subject as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Question body value object.
#[derive(Debug, Clone)]
pub struct QuestionContent(String);

impl QuestionContent {
    /// Create new validated content.
    ///
    /// # Errors
    /// * `Empty` - Content is the empty string
    pub fn new(content: String) -> Result<Self, QuestionContentError> {
        if content.is_empty() {
            Err(QuestionContentError::Empty)
        } else {
            Ok(Self(content))
        }
    }

    /// Get content as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to post a new question.
#[derive(Debug)]
pub struct CreateQuestionCommand {
    pub subject: QuestionSubject,
    pub content: QuestionContent,
    pub author_id: UserId,
}

/// One page of the question list, newest first.
#[derive(Debug)]
pub struct QuestionPage {
    /// Total number of questions, independent of the page bounds.
    pub total: i64,
    pub items: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_validation() {
        assert!(QuestionSubject::new("How do lifetimes work?".to_string()).is_ok());
        assert!(QuestionSubject::new(String::new()).is_err());
        assert!(QuestionSubject::new("x".repeat(201)).is_err());
    }

    #[test]
    fn test_question_id_from_string() {
        assert_eq!(QuestionId::from_string("42"), Ok(QuestionId(42)));
        assert!(QuestionId::from_string("forty-two").is_err());
    }
}
