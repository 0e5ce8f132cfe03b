use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "sessionId";

/// Opaque bearer token minted at registration. Compared byte for byte,
/// never parsed.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

/// Builds the `Set-Cookie` value handed out on registration.
pub fn session_cookie(token: &SessionToken, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.as_str().to_owned()))
        .path("/")
        .max_age(Duration::days(ttl_days))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_unique() {
        let a = SessionToken::generate();
        let b = SessionToken::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn cookie_carries_token_and_scope() {
        let token = SessionToken::generate();
        let cookie = session_cookie(&token, 7);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), token.as_str());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
