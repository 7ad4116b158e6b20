use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::question::models::CreateQuestionCommand;
use crate::domain::question::models::QuestionContent;
use crate::domain::question::models::QuestionSubject;
use crate::domain::question::ports::QuestionServicePort;
use crate::inbound::http::handlers::questions::QuestionResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::FieldProblem;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_question(
    State(state): State<AppState>,
    Extension(current_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateQuestionRequest>,
) -> Result<ApiSuccess<QuestionResponseData>, ApiError> {
    // The author comes from the validated token, never from the body.
    let command = body.try_into_command(current_user)?;

    state
        .question_service
        .create(command)
        .await
        .map_err(ApiError::from)
        .map(|ref question| ApiSuccess::new(StatusCode::CREATED, question.into()))
}

/// HTTP request body for posting a question (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateQuestionRequest {
    subject: String,
    content: String,
}

impl CreateQuestionRequest {
    fn try_into_command(
        self,
        author: AuthenticatedUser,
    ) -> Result<CreateQuestionCommand, ApiError> {
        let mut problems = Vec::new();

        let subject = QuestionSubject::new(self.subject);
        if let Err(e) = &subject {
            problems.push(FieldProblem::new("subject", e.to_string()));
        }

        let content = QuestionContent::new(self.content);
        if let Err(e) = &content {
            problems.push(FieldProblem::new("content", e.to_string()));
        }

        match (subject, content) {
            (Ok(subject), Ok(content)) => Ok(CreateQuestionCommand {
                subject,
                content,
                author_id: author.user_id,
            }),
            _ => Err(ApiError::Validation(problems)),
        }
    }
}
