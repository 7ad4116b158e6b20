use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::answer::models::AnswerContent;
use crate::domain::answer::models::CreateAnswerCommand;
use crate::domain::answer::ports::AnswerServicePort;
use crate::domain::question::models::QuestionId;
use crate::inbound::http::handlers::answers::AnswerResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::FieldProblem;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_answer(
    State(state): State<AppState>,
    Extension(current_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateAnswerRequest>,
) -> Result<ApiSuccess<AnswerResponseData>, ApiError> {
    let command = body.try_into_command(current_user)?;

    state
        .answer_service
        .create(command)
        .await
        .map_err(ApiError::from)
        .map(|ref answer| ApiSuccess::new(StatusCode::CREATED, answer.into()))
}

/// HTTP request body for posting an answer (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAnswerRequest {
    question_id: i64,
    content: String,
}

impl CreateAnswerRequest {
    fn try_into_command(self, author: AuthenticatedUser) -> Result<CreateAnswerCommand, ApiError> {
        let content = AnswerContent::new(self.content).map_err(|e| {
            ApiError::Validation(vec![FieldProblem::new("content", e.to_string())])
        })?;

        Ok(CreateAnswerCommand {
            question_id: QuestionId(self.question_id),
            content,
            author_id: author.user_id,
        })
    }
}
