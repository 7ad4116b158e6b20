use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::question::ports::QuestionServicePort;
use crate::inbound::http::handlers::questions::QuestionResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<u32>,
    size: Option<u32>,
}

pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<ApiSuccess<QuestionListResponseData>, ApiError> {
    let page = params.page.unwrap_or(0);
    let size = params.size.unwrap_or(10);

    state
        .question_service
        .list(page, size)
        .await
        .map_err(ApiError::from)
        .map(|page| {
            let items: Vec<QuestionResponseData> = page.items.iter().map(|q| q.into()).collect();
            ApiSuccess::new(
                StatusCode::OK,
                QuestionListResponseData {
                    total: page.total,
                    items,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionListResponseData {
    pub total: i64,
    pub items: Vec<QuestionResponseData>,
}
