use async_trait::async_trait;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::CreateQuestionCommand;
use crate::domain::question::models::Question;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionPage;

/// Port for question domain operations.
#[async_trait]
pub trait QuestionServicePort: Send + Sync + 'static {
    /// Retrieve one page of questions, newest first.
    ///
    /// # Arguments
    /// * `page` - Zero-based page index
    /// * `size` - Page size
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, page: u32, size: u32) -> Result<QuestionPage, QuestionError>;

    /// Retrieve a question by id.
    ///
    /// # Errors
    /// * `NotFound` - Question does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, id: QuestionId) -> Result<Question, QuestionError>;

    /// Post a new question.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateQuestionCommand) -> Result<Question, QuestionError>;
}

/// Persistence operations for questions.
#[async_trait]
pub trait QuestionRepository: Send + Sync + 'static {
    /// Persist a new question and return it with its assigned id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateQuestionCommand) -> Result<Question, QuestionError>;

    /// Retrieve a question by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionError>;

    /// Retrieve a window of questions (newest first) plus the total count.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, limit: i64, offset: i64) -> Result<QuestionPage, QuestionError>;
}
