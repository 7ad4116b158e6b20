use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for the authentication service: registration, login, and
/// bearer-token resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account. No token is issued; login is a separate step.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password, indistinguishably
    /// * `DatabaseError` - Database operation failed
    async fn login(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedSession, UserError>;

    /// Validate a bearer token and re-resolve its subject to a live account.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Bad signature, expiry, missing subject, or a
    ///   subject that no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn authenticate_token(&self, token: &str) -> Result<User, UserError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new account and return it with its assigned id.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Unique constraint on username violated
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve a user by username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve the first user matching either the username or the email.
    ///
    /// Used as the registration collision fast path.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username_or_email(
        &self,
        username: &Username,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserError>;
}
