use thiserror::Error;

/// Error for QuestionId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionIdError {
    #[error("Invalid question id: {0}")]
    InvalidFormat(String),
}

/// Error for QuestionSubject validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionSubjectError {
    #[error("Subject must not be empty")]
    Empty,

    #[error("Subject too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for QuestionContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionContentError {
    #[error("Content must not be empty")]
    Empty,
}

/// Top-level error for question operations
#[derive(Debug, Clone, Error)]
pub enum QuestionError {
    #[error("Invalid subject: {0}")]
    InvalidSubject(#[from] QuestionSubjectError),

    #[error("Invalid content: {0}")]
    InvalidContent(#[from] QuestionContentError),

    #[error("Question not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
