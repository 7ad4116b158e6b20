use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::answer::ports::AnswerServicePort;
use crate::domain::question::models::QuestionId;
use crate::domain::question::ports::QuestionServicePort;
use crate::inbound::http::handlers::answers::AnswerResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<ApiSuccess<QuestionDetailResponseData>, ApiError> {
    let question_id =
        QuestionId::from_string(&question_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let question = state
        .question_service
        .get(question_id)
        .await
        .map_err(ApiError::from)?;

    let answers = state
        .answer_service
        .list_for_question(question_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        QuestionDetailResponseData {
            id: question.id.0,
            subject: question.subject.as_str().to_string(),
            content: question.content.as_str().to_string(),
            author_id: question.author_id.0,
            created_at: question.created_at,
            answers: answers.iter().map(|a| a.into()).collect(),
        },
    ))
}

/// Question detail: the question itself plus its answers, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDetailResponseData {
    pub id: i64,
    pub subject: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<AnswerResponseData>,
}
