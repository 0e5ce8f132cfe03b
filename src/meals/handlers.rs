use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{CreateMealRequest, MealListResponse, MealResponse, UpdateMealRequest};
use super::guard::{authorize_mutation, MealAccess};
use super::metrics::{self, DietMetrics};
use super::repo::MealChanges;
use crate::{auth::AuthSession, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/metrics", get(get_metrics))
        .route(
            "/meals/:id",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn list_meals(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<MealListResponse>, ApiError> {
    let meals = state.meals.list_for_user(session.user_id).await?;
    Ok(Json(MealListResponse {
        meals: meals.into_iter().map(MealResponse::from).collect(),
    }))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn get_meal(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<MealResponse>, ApiError> {
    let meal = state
        .meals
        .find_for_user(session.user_id, id)
        .await?
        .ok_or(ApiError::MealNotFound)?;
    Ok(Json(MealResponse::from(meal)))
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn get_metrics(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<DietMetrics>, ApiError> {
    let meals = state
        .meals
        .list_for_user_by_date_desc(session.user_id)
        .await?;
    Ok(Json(metrics::compute(&meals)))
}

#[instrument(skip(state, session, payload), fields(user_id = %session.user_id))]
pub async fn create_meal(
    State(state): State<AppState>,
    session: AuthSession,
    payload: Result<Json<CreateMealRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let meal = state
        .meals
        .create(session.user_id, payload.into_new_meal())
        .await?;
    info!(meal_id = %meal.id, "meal created");
    Ok(StatusCode::CREATED)
}

/// PUT /meals/:id. Ownership is checked before the body is parsed; a
/// malformed body on a foreign meal still gets the ownership error.
#[instrument(skip(state, session, payload), fields(user_id = %session.user_id))]
pub async fn update_meal(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateMealRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    ensure_mutation_allowed(&state, &session, id).await?;

    let Json(payload) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let changes = MealChanges::from(payload);
    if changes.is_empty() {
        return Ok(StatusCode::OK);
    }

    state.meals.update(id, changes).await?;
    info!(meal_id = %id, "meal updated");
    Ok(StatusCode::OK)
}

#[instrument(skip(state, session), fields(user_id = %session.user_id))]
pub async fn delete_meal(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ensure_mutation_allowed(&state, &session, id).await?;

    state.meals.delete(id).await?;
    info!(meal_id = %id, "meal deleted");
    Ok(StatusCode::OK)
}

async fn ensure_mutation_allowed(
    state: &AppState,
    session: &AuthSession,
    meal_id: Uuid,
) -> Result<(), ApiError> {
    match authorize_mutation(&state.meals, session, meal_id).await? {
        MealAccess::Allowed => Ok(()),
        MealAccess::NotFound => Err(ApiError::MealNotFound),
        MealAccess::Forbidden => {
            warn!(meal_id = %meal_id, "mutation rejected: session does not own meal");
            Err(ApiError::Forbidden)
        }
    }
}
