use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::answer::errors::AnswerError;
use crate::domain::question::errors::QuestionError;
use crate::domain::user::errors::UserError;

pub mod answers;
pub mod questions;
pub mod users;

/// Successful response: a status code and a plain JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Per-field problem reported in a validation failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldProblem {
    pub field: &'static str,
    pub message: String,
}

impl FieldProblem {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    Validation(Vec<FieldProblem>),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    /// Any credential or token failure. Carries no cause: the client sees
    /// one fixed message whatever actually went wrong.
    Unauthorized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ValidationBody {
    message: String,
    errors: Vec<FieldProblem>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::Validation(problems) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    message: "Validation failed".to_string(),
                    errors: problems,
                }),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { message })).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { message })).into_response()
            }
            ApiError::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorBody { message })).into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorBody {
                    message: "Invalid authentication credentials".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized,
            UserError::InvalidUsername(ref e) => {
                ApiError::Validation(vec![FieldProblem::new("username", e.to_string())])
            }
            UserError::InvalidEmail(ref e) => {
                ApiError::Validation(vec![FieldProblem::new("email", e.to_string())])
            }
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<QuestionError> for ApiError {
    fn from(err: QuestionError) -> Self {
        match err {
            QuestionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            QuestionError::InvalidSubject(ref e) => {
                ApiError::Validation(vec![FieldProblem::new("subject", e.to_string())])
            }
            QuestionError::InvalidContent(ref e) => {
                ApiError::Validation(vec![FieldProblem::new("content", e.to_string())])
            }
            QuestionError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AnswerError> for ApiError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::QuestionNotFound(_) => ApiError::NotFound(err.to_string()),
            AnswerError::InvalidContent(ref e) => {
                ApiError::Validation(vec![FieldProblem::new("content", e.to_string())])
            }
            AnswerError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
