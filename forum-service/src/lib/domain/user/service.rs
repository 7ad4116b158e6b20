use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Authentication service: registration, login, and token resolution.
///
/// Coordinates the credential store with the password hasher and token
/// handler from the auth library.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl_minutes: i64,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Shared password/token coordinator
    /// * `token_ttl_minutes` - Lifetime of issued access tokens
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>, token_ttl_minutes: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_minutes,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Fast-path collision check. The unique constraints in storage remain
        // the real guarantee; a concurrent registration slipping past this
        // check still surfaces as a conflict from `create`.
        if let Some(existing) = self
            .repository
            .find_by_username_or_email(&command.username, &command.email)
            .await?
        {
            return Err(if existing.username == command.username {
                UserError::UsernameAlreadyExists(command.username.to_string())
            } else {
                UserError::EmailAlreadyExists(command.email.as_str().to_string())
            });
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        self.repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await
    }

    async fn login(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<AuthenticatedSession, UserError> {
        // Unknown username and wrong password must be indistinguishable to
        // the caller.
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let claims = Claims::for_subject(user.username.as_str(), self.token_ttl_minutes);
        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                other => UserError::Unknown(format!("Token issuance failed: {}", other)),
            })?;

        Ok(AuthenticatedSession {
            user,
            access_token: result.access_token,
        })
    }

    async fn authenticate_token(&self, token: &str) -> Result<User, UserError> {
        let claims: Claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!("Token validation failed: {}", e);
            UserError::InvalidCredentials
        })?;

        let username =
            Username::new(claims.sub).map_err(|_| UserError::InvalidCredentials)?;

        // Token validity does not imply the account still exists.
        self.repository
            .find_by_username(&username)
            .await?
            .ok_or(UserError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_username_or_email(
                &self,
                username: &Username,
                email: &EmailAddress,
            ) -> Result<Option<User>, UserError>;
        }
    }

    fn service(repository: MockTestUserRepository) -> AuthService<MockTestUserRepository> {
        AuthService::new(Arc::new(repository), Arc::new(Authenticator::new(SECRET)), 60)
    }

    fn stored_user(username: &str, email: &str, password: &str) -> User {
        let authenticator = Authenticator::new(SECRET);
        User {
            id: UserId(1),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username_or_email()
            .times(1)
            .returning(|_, _| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.email.as_str() == "a@x.com"
                    && user.password_hash.starts_with("$2")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    created_at: Utc::now(),
                })
            });

        let service = service(repository);

        let command = CreateUserCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            password: "Secret123".to_string(),
        };

        let user = service.register(command).await.unwrap();
        assert_eq!(user.username.as_str(), "alice");
        // Password is hashed with real bcrypt
        assert!(user.password_hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username_or_email()
            .times(1)
            .returning(|_, _| Ok(Some(stored_user("alice", "other@x.com", "pw"))));

        repository.expect_create().times(0);

        let service = service(repository);

        let command = CreateUserCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            password: "Secret123".to_string(),
        };

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username_or_email()
            .times(1)
            .returning(|_, _| Ok(Some(stored_user("someone-else", "a@x.com", "pw"))));

        repository.expect_create().times(0);

        let service = service(repository);

        let command = CreateUserCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            password: "Secret123".to_string(),
        };

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_login_success_issues_valid_token() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "a@x.com", "Secret123"))));

        let service = service(repository);

        let username = Username::new("alice".to_string()).unwrap();
        let session = service.login(&username, "Secret123").await.unwrap();

        assert_eq!(session.user.username.as_str(), "alice");
        assert!(!session.access_token.is_empty());

        let claims: Claims = Authenticator::new(SECRET)
            .validate_token(&session.access_token)
            .unwrap();
        assert_eq!(claims.sub, "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_user_are_identical() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .withf(|u: &Username| u.as_str() == "alice")
            .returning(|_| Ok(Some(stored_user("alice", "a@x.com", "Secret123"))));
        repository
            .expect_find_by_username()
            .withf(|u: &Username| u.as_str() == "nobody")
            .returning(|_| Ok(None));

        let service = service(repository);

        let wrong_password = service
            .login(&Username::new("alice".to_string()).unwrap(), "WrongPass")
            .await
            .unwrap_err();
        let unknown_user = service
            .login(&Username::new("nobody".to_string()).unwrap(), "Secret123")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, UserError::InvalidCredentials));
        assert!(matches!(unknown_user, UserError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_authenticate_token_roundtrip() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(2)
            .returning(|_| Ok(Some(stored_user("alice", "a@x.com", "Secret123"))));

        let service = service(repository);

        let username = Username::new("alice".to_string()).unwrap();
        let session = service.login(&username, "Secret123").await.unwrap();

        let user = service
            .authenticate_token(&session.access_token)
            .await
            .unwrap();
        assert_eq!(user.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_garbage() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);

        let service = service(repository);

        let result = service.authenticate_token("not.a.token").await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_deleted_user() {
        let mut repository = MockTestUserRepository::new();

        // The token is valid, but the subject no longer resolves.
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let token = Authenticator::new(SECRET)
            .generate_token(&Claims::for_subject("alice", 60))
            .unwrap();

        let result = service.authenticate_token(&token).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_token_from_other_secret() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);

        let service = service(repository);

        let token = Authenticator::new(b"another-secret-key-also-32-bytes-long!!")
            .generate_token(&Claims::for_subject("alice", 60))
            .unwrap();

        let result = service.authenticate_token(&token).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }
}
