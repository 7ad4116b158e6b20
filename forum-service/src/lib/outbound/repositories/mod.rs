pub mod answer;
pub mod question;
pub mod user;

pub use answer::PostgresAnswerRepository;
pub use question::PostgresQuestionRepository;
pub use user::PostgresUserRepository;
