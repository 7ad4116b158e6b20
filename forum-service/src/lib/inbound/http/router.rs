use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::answers::create_answer;
use super::handlers::questions::create_question;
use super::handlers::questions::get_question;
use super::handlers::questions::list_questions;
use super::handlers::users::login;
use super::handlers::users::register_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::answer::service::AnswerService;
use crate::domain::question::service::QuestionService;
use crate::domain::user::service::AuthService;
use crate::outbound::repositories::PostgresAnswerRepository;
use crate::outbound::repositories::PostgresQuestionRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub question_service: Arc<QuestionService<PostgresQuestionRepository>>,
    pub answer_service: Arc<AnswerService<PostgresAnswerRepository>>,
}

pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let public_routes = Router::new()
        .route("/api/user/create", post(register_user))
        .route("/api/user/login", post(login))
        .route("/api/question/list", get(list_questions))
        .route("/api/question/detail/:question_id", get(get_question));

    let protected_routes = Router::new()
        .route("/api/question/create", post(create_question))
        .route("/api/answer/create", post(create_answer))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    // Explicit method and header lists: wildcards cannot be combined with
    // credentialed requests.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
