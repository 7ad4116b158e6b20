use thiserror::Error;

/// Error for AnswerContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnswerContentError {
    #[error("Content must not be empty")]
    Empty,
}

/// Top-level error for answer operations
#[derive(Debug, Clone, Error)]
pub enum AnswerError {
    #[error("Invalid content: {0}")]
    InvalidContent(#[from] AnswerContentError),

    #[error("Question not found: {0}")]
    QuestionNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
