use async_trait::async_trait;

use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::CreateAnswerCommand;
use crate::domain::question::models::QuestionId;

/// Port for answer domain operations.
#[async_trait]
pub trait AnswerServicePort: Send + Sync + 'static {
    /// Post a new answer to a question.
    ///
    /// # Errors
    /// * `QuestionNotFound` - Target question does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateAnswerCommand) -> Result<Answer, AnswerError>;

    /// Retrieve all answers to a question, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_question(&self, question_id: QuestionId) -> Result<Vec<Answer>, AnswerError>;
}

/// Persistence operations for answers.
#[async_trait]
pub trait AnswerRepository: Send + Sync + 'static {
    /// Persist a new answer and return it with its assigned id.
    ///
    /// # Errors
    /// * `QuestionNotFound` - Foreign key to the question violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateAnswerCommand) -> Result<Answer, AnswerError>;

    /// Retrieve all answers to a question, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_question(&self, question_id: QuestionId) -> Result<Vec<Answer>, AnswerError>;
}
