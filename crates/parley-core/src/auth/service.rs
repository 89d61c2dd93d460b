//! Auth service orchestrating registration and login.
//!
//! AuthService composes the user repository, password hasher, and token
//! issuer. It is generic over all three to maintain clean architecture
//! (parley-core never depends on parley-infra).

use chrono::Utc;
use parley_types::error::{CredentialError, RepositoryError};
use parley_types::user::{AuthSession, UserRecord};
use tracing::info;
use uuid::Uuid;

use crate::auth::hasher::PasswordHasher;
use crate::auth::token::TokenIssuer;
use crate::repository::user::UserRepository;

/// Orchestrates credential management: register and login.
pub struct AuthService<U: UserRepository, H: PasswordHasher, T: TokenIssuer> {
    users: U,
    hasher: H,
    tokens: T,
    token_ttl_days: i64,
}

impl<U: UserRepository, H: PasswordHasher, T: TokenIssuer> AuthService<U, H, T> {
    /// Create a new auth service with the given ports and token lifetime.
    pub fn new(users: U, hasher: H, tokens: T, token_ttl_days: i64) -> Self {
        Self {
            users,
            hasher,
            tokens,
            token_ttl_days,
        }
    }

    /// Register a new account and issue a session token.
    ///
    /// The email pre-check keeps the common duplicate path cheap; the
    /// UNIQUE constraint in the repository catches the race loser, which
    /// gets the same `EmailTaken` error.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, CredentialError> {
        if email.is_empty() || password.is_empty() {
            return Err(CredentialError::MissingFields);
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(CredentialError::EmailTaken);
        }

        let record = UserRecord {
            id: Uuid::now_v7(),
            email: email.to_string(),
            password_hash: self.hasher.hash(password)?,
            created_at: Utc::now(),
        };

        match self.users.create(&record).await {
            Ok(()) => {}
            Err(RepositoryError::Conflict(_)) => return Err(CredentialError::EmailTaken),
            Err(e) => return Err(e.into()),
        }

        let token = self.tokens.issue(&record.id, self.token_ttl_days)?;
        info!(user_id = %record.id, "user registered");

        Ok(AuthSession {
            user: record.to_user(),
            token,
        })
    }

    /// Authenticate an existing account and issue a fresh session token.
    ///
    /// Unknown email and wrong password both produce `InvalidCredentials`
    /// so the caller cannot tell which check failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, CredentialError> {
        if email.is_empty() || password.is_empty() {
            return Err(CredentialError::MissingFields);
        }

        let Some(record) = self.users.find_by_email(email).await? else {
            return Err(CredentialError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &record.password_hash)? {
            return Err(CredentialError::InvalidCredentials);
        }

        let token = self.tokens.issue(&record.id, self.token_ttl_days)?;
        info!(user_id = %record.id, "user logged in");

        Ok(AuthSession {
            user: record.to_user(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::error::PasswordError;
    use parley_types::error::TokenError;
    use std::sync::Mutex;

    /// In-memory user store backed by a Vec.
    #[derive(Default)]
    struct MemoryUserRepository {
        rows: Mutex<Vec<UserRecord>>,
    }

    impl UserRepository for MemoryUserRepository {
        async fn create(&self, user: &UserRecord) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| r.email == user.email) {
                return Err(RepositoryError::Conflict(format!(
                    "email '{}' already registered",
                    user.email
                )));
            }
            rows.push(user.clone());
            Ok(())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.email == email)
                .cloned())
        }

        async fn find_by_id(&self, id: &Uuid) -> Result<Option<UserRecord>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| &r.id == id)
                .cloned())
        }
    }

    /// Reversible fake hasher; good enough to exercise the service logic.
    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, password: &str) -> Result<String, PasswordError> {
            Ok(format!("plain:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
            let stored = hash
                .strip_prefix("plain:")
                .ok_or(PasswordError::InvalidHash)?;
            Ok(stored == password)
        }
    }

    /// Token issuer that embeds the subject id in the token text.
    struct StaticTokenIssuer;

    impl TokenIssuer for StaticTokenIssuer {
        fn issue(&self, subject: &Uuid, _ttl_days: i64) -> Result<String, TokenError> {
            Ok(format!("tok-{subject}"))
        }

        fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
            let raw = token.strip_prefix("tok-").ok_or(TokenError::Invalid)?;
            Uuid::parse_str(raw).map_err(|_| TokenError::Invalid)
        }
    }

    fn service() -> AuthService<MemoryUserRepository, PlainHasher, StaticTokenIssuer> {
        AuthService::new(
            MemoryUserRepository::default(),
            PlainHasher,
            StaticTokenIssuer,
            7,
        )
    }

    #[tokio::test]
    async fn test_register_returns_user_and_token() {
        let svc = service();
        let session = svc.register("a@example.com", "password123").await.unwrap();
        assert_eq!(session.user.email, "a@example.com");
        assert_eq!(session.token, format!("tok-{}", session.user.id));
    }

    #[tokio::test]
    async fn test_register_empty_fields() {
        let svc = service();
        assert!(matches!(
            svc.register("", "pw").await,
            Err(CredentialError::MissingFields)
        ));
        assert!(matches!(
            svc.register("a@example.com", "").await,
            Err(CredentialError::MissingFields)
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_fails_regardless_of_password() {
        let svc = service();
        svc.register("a@example.com", "first").await.unwrap();
        let err = svc.register("a@example.com", "second").await.unwrap_err();
        assert!(matches!(err, CredentialError::EmailTaken));
    }

    #[tokio::test]
    async fn test_login_after_register_succeeds() {
        let svc = service();
        let registered = svc.register("a@example.com", "password123").await.unwrap();
        let session = svc.login("a@example.com", "password123").await.unwrap();
        assert_eq!(session.user.id, registered.user.id);
        assert!(!session.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_identical() {
        let svc = service();
        svc.register("a@example.com", "password123").await.unwrap();

        let wrong_pw = svc.login("a@example.com", "nope").await.unwrap_err();
        let no_user = svc.login("b@example.com", "password123").await.unwrap_err();

        assert!(matches!(wrong_pw, CredentialError::InvalidCredentials));
        assert!(matches!(no_user, CredentialError::InvalidCredentials));
        assert_eq!(wrong_pw.to_string(), no_user.to_string());
    }

    #[tokio::test]
    async fn test_login_empty_fields() {
        let svc = service();
        assert!(matches!(
            svc.login("", "").await,
            Err(CredentialError::MissingFields)
        ));
    }
}
