use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::AnswerContent;
use crate::domain::answer::models::AnswerId;
use crate::domain::answer::models::CreateAnswerCommand;
use crate::domain::answer::ports::AnswerRepository;
use crate::domain::question::models::QuestionId;
use crate::domain::user::models::UserId;

pub struct PostgresAnswerRepository {
    pool: PgPool,
}

impl PostgresAnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AnswerRow {
    id: i64,
    question_id: i64,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl AnswerRow {
    fn try_into_answer(self) -> Result<Answer, AnswerError> {
        Ok(Answer {
            id: AnswerId(self.id),
            question_id: QuestionId(self.question_id),
            content: AnswerContent::new(self.content)?,
            author_id: UserId(self.author_id),
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    async fn create(&self, command: CreateAnswerCommand) -> Result<Answer, AnswerError> {
        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            INSERT INTO answers (question_id, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, content, author_id, created_at
            "#,
        )
        .bind(command.question_id.0)
        .bind(command.content.as_str())
        .bind(command.author_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Inserting against a missing question trips the FK, which is
                // the race-free existence check.
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some("answers_question_id_fkey")
                {
                    return AnswerError::QuestionNotFound(command.question_id.0);
                }
            }
            AnswerError::DatabaseError(e.to_string())
        })?;

        row.try_into_answer()
    }

    async fn list_by_question(&self, question_id: QuestionId) -> Result<Vec<Answer>, AnswerError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, content, author_id, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(question_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AnswerError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(AnswerRow::try_into_answer)
            .collect()
    }
}
