use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::FieldProblem;
use crate::inbound::http::router::AppState;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<StatusCode, ApiError> {
    let command = body.try_into_command()?;

    state.auth_service.register(command).await?;

    // Account created; login is a separate step and no token is issued here.
    Ok(StatusCode::NO_CONTENT)
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    username: String,
    email: String,
    password: String,
    password_confirmation: String,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ApiError> {
        let mut problems = Vec::new();

        let username = Username::new(self.username);
        if let Err(e) = &username {
            problems.push(FieldProblem::new("username", e.to_string()));
        }

        let email = EmailAddress::new(self.email);
        if let Err(e) = &email {
            problems.push(FieldProblem::new("email", e.to_string()));
        }

        if self.password.is_empty() {
            problems.push(FieldProblem::new("password", "password must not be empty"));
        }
        if self.password != self.password_confirmation {
            problems.push(FieldProblem::new(
                "password_confirmation",
                "password confirmation does not match",
            ));
        }

        match (username, email) {
            (Ok(username), Ok(email)) if problems.is_empty() => {
                Ok(CreateUserCommand::new(username, email, self.password))
            }
            _ => Err(ApiError::Validation(problems)),
        }
    }
}
