use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::SessionToken;
use crate::db::datetime_text;

/// User row, one session token per user.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub session_id: SessionToken,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct UserRepository {
    db: SqlitePool,
}

impl UserRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Inserts a freshly registered user owning the given session token.
    /// Duplicate emails are allowed; each registration is a new identity.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        session_id: &SessionToken,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, session_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, session_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(session_id.as_str())
        .bind(datetime_text(OffsetDateTime::now_utc()))
        .fetch_one(&self.db)
        .await
    }

    /// Resolves a session token to its user, if any.
    pub async fn find_by_session_token(
        &self,
        token: &SessionToken,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, session_id, created_at
            FROM users
            WHERE session_id = ?
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.db)
        .await
    }
}
