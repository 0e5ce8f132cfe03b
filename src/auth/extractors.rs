use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::warn;
use uuid::Uuid;

use super::session::{SessionToken, SESSION_COOKIE};
use crate::{error::ApiError, state::AppState};

/// Authenticated session: the resolved user id plus the token it was
/// resolved from. Rejects with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: Uuid,
    pub token: SessionToken,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = match jar.get(SESSION_COOKIE) {
            Some(cookie) => SessionToken::from(cookie.value()),
            None => {
                warn!("request without session cookie");
                return Err(ApiError::Unauthenticated);
            }
        };

        let user = state
            .users
            .find_by_session_token(&token)
            .await?
            .ok_or_else(|| {
                warn!("session cookie does not match any user");
                ApiError::Unauthenticated
            })?;

        Ok(AuthSession {
            user_id: user.id,
            token,
        })
    }
}
