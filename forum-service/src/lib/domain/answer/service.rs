use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::CreateAnswerCommand;
use crate::domain::answer::ports::AnswerRepository;
use crate::domain::answer::ports::AnswerServicePort;
use crate::domain::question::models::QuestionId;

/// Domain service implementation for answer operations.
pub struct AnswerService<AR>
where
    AR: AnswerRepository,
{
    repository: Arc<AR>,
}

impl<AR> AnswerService<AR>
where
    AR: AnswerRepository,
{
    /// Create a new answer service with an injected repository.
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AnswerServicePort for AnswerService<AR>
where
    AR: AnswerRepository,
{
    async fn create(&self, command: CreateAnswerCommand) -> Result<Answer, AnswerError> {
        // Existence of the target question is enforced by the foreign key;
        // the repository maps that violation to QuestionNotFound.
        self.repository.create(command).await
    }

    async fn list_for_question(&self, question_id: QuestionId) -> Result<Vec<Answer>, AnswerError> {
        self.repository.list_by_question(question_id).await
    }
}
