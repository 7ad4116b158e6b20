use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::CreateQuestionCommand;
use crate::domain::question::models::Question;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionPage;
use crate::domain::question::ports::QuestionRepository;
use crate::domain::question::ports::QuestionServicePort;

/// Domain service implementation for question operations.
pub struct QuestionService<QR>
where
    QR: QuestionRepository,
{
    repository: Arc<QR>,
}

impl<QR> QuestionService<QR>
where
    QR: QuestionRepository,
{
    /// Create a new question service with an injected repository.
    pub fn new(repository: Arc<QR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<QR> QuestionServicePort for QuestionService<QR>
where
    QR: QuestionRepository,
{
    async fn list(&self, page: u32, size: u32) -> Result<QuestionPage, QuestionError> {
        let limit = i64::from(size);
        let offset = i64::from(page) * i64::from(size);
        self.repository.list(limit, offset).await
    }

    async fn get(&self, id: QuestionId) -> Result<Question, QuestionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(QuestionError::NotFound(id.0))
    }

    async fn create(&self, command: CreateQuestionCommand) -> Result<Question, QuestionError> {
        self.repository.create(command).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::question::models::QuestionContent;
    use crate::domain::question::models::QuestionSubject;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestQuestionRepository {}

        #[async_trait]
        impl QuestionRepository for TestQuestionRepository {
            async fn create(&self, command: CreateQuestionCommand) -> Result<Question, QuestionError>;
            async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionError>;
            async fn list(&self, limit: i64, offset: i64) -> Result<QuestionPage, QuestionError>;
        }
    }

    fn question(id: i64) -> Question {
        Question {
            id: QuestionId(id),
            subject: QuestionSubject::new("How do lifetimes work?".to_string()).unwrap(),
            content: QuestionContent::new("Asking for a friend.".to_string()).unwrap(),
            author_id: UserId(1),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_translates_page_and_size_to_window() {
        let mut repository = MockTestQuestionRepository::new();

        repository
            .expect_list()
            .with(eq(10i64), eq(20i64))
            .times(1)
            .returning(|_, _| {
                Ok(QuestionPage {
                    total: 25,
                    items: vec![question(5)],
                })
            });

        let service = QuestionService::new(Arc::new(repository));

        let page = service.list(2, 10).await.unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockTestQuestionRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = QuestionService::new(Arc::new(repository));

        let result = service.get(QuestionId(99)).await;
        assert!(matches!(result.unwrap_err(), QuestionError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_create_returns_stored_question() {
        let mut repository = MockTestQuestionRepository::new();

        repository
            .expect_create()
            .withf(|cmd| cmd.subject.as_str() == "How do lifetimes work?")
            .times(1)
            .returning(|_| Ok(question(1)));

        let service = QuestionService::new(Arc::new(repository));

        let command = CreateQuestionCommand {
            subject: QuestionSubject::new("How do lifetimes work?".to_string()).unwrap(),
            content: QuestionContent::new("Asking for a friend.".to_string()).unwrap(),
            author_id: UserId(1),
        };

        let created = service.create(command).await.unwrap();
        assert_eq!(created.id, QuestionId(1));
    }
}
