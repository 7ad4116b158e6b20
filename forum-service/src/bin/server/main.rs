use std::sync::Arc;

use auth::Authenticator;
use forum_service::config::Config;
use forum_service::domain::answer::service::AnswerService;
use forum_service::domain::question::service::QuestionService;
use forum_service::domain::user::service::AuthService;
use forum_service::inbound::http::router::create_router;
use forum_service::inbound::http::router::AppState;
use forum_service::outbound::repositories::PostgresAnswerRepository;
use forum_service::outbound::repositories::PostgresQuestionRepository;
use forum_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "forum-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fails when the signing secret is missing; better here than on the
    // first login request.
    let config = Config::load()?;
    let algorithm = config.jwt.algorithm()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        jwt_algorithm = %config.jwt.algorithm,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::with_algorithm(
        config.jwt.secret.as_bytes(),
        algorithm,
    ));

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
        Arc::clone(&authenticator),
        config.jwt.expiration_minutes,
    ));
    let question_service = Arc::new(QuestionService::new(Arc::new(
        PostgresQuestionRepository::new(pg_pool.clone()),
    )));
    let answer_service = Arc::new(AnswerService::new(Arc::new(PostgresAnswerRepository::new(
        pg_pool,
    ))));

    let state = AppState {
        auth_service,
        question_service,
        answer_service,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(state, &config.cors.allowed_origins);
    axum::serve(http_listener, application).await?;

    Ok(())
}
