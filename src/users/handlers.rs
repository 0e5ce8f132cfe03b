use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use axum_extra::extract::CookieJar;
use tracing::{info, instrument};

use super::dto::CreateUserRequest;
use crate::{
    auth::{session_cookie, SessionToken},
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(register))
}

/// POST /users: creates a user and hands out a fresh session cookie.
#[instrument(skip(state, jar, payload))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let token = SessionToken::generate();
    let user = state
        .users
        .create(&payload.name, &payload.email, &token)
        .await?;

    info!(user_id = %user.id, "user registered");

    let jar = jar.add(session_cookie(
        &token,
        state.config.session.cookie_ttl_days,
    ));
    Ok((jar, StatusCode::CREATED))
}
