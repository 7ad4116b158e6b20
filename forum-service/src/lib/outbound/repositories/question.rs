use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::CreateQuestionCommand;
use crate::domain::question::models::Question;
use crate::domain::question::models::QuestionContent;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionPage;
use crate::domain::question::models::QuestionSubject;
use crate::domain::question::ports::QuestionRepository;
use crate::domain::user::models::UserId;

pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    subject: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl QuestionRow {
    fn try_into_question(self) -> Result<Question, QuestionError> {
        Ok(Question {
            id: QuestionId(self.id),
            subject: QuestionSubject::new(self.subject)?,
            content: QuestionContent::new(self.content)?,
            author_id: UserId(self.author_id),
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn create(&self, command: CreateQuestionCommand) -> Result<Question, QuestionError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (subject, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, subject, content, author_id, created_at
            "#,
        )
        .bind(command.subject.as_str())
        .bind(command.content.as_str())
        .bind(command.author_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        row.try_into_question()
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, subject, content, author_id, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        row.map(QuestionRow::try_into_question).transpose()
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<QuestionPage, QuestionError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, subject, content, author_id, created_at
            FROM questions
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(QuestionRow::try_into_question)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuestionPage { total, items })
    }
}
