//! User account types.
//!
//! `UserRecord` is the stored shape and carries the password hash; it is
//! deliberately not `Serialize`. `User` is the wire-safe view handlers
//! return to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user row, including the password hash.
///
/// Created exactly once by registration; never updated or deleted.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    /// PHC-format Argon2id hash. Never serialized.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// The wire-safe view of this record (no password hash).
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Public user view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful registration or login: the user plus a freshly
/// issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: Uuid::now_v7(),
            email: "a@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_to_user_drops_hash() {
        let rec = record();
        let user = rec.to_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@example.com"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_auth_session_serializes_user_and_token() {
        let session = AuthSession {
            user: record().to_user(),
            token: "tok".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"token\":\"tok\""));
        assert!(json.contains("\"email\":\"a@example.com\""));
    }
}
