use uuid::Uuid;

use super::repo::MealRepository;
use crate::auth::AuthSession;

/// Outcome of the mutation authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealAccess {
    Allowed,
    /// No meal with that id exists.
    NotFound,
    /// The meal exists but belongs to a different user's session.
    Forbidden,
}

/// Decides whether a session may mutate a meal. The lookup joins the meal
/// to its owning user and compares session tokens rather than user ids.
pub async fn authorize_mutation(
    meals: &MealRepository,
    session: &AuthSession,
    meal_id: Uuid,
) -> sqlx::Result<MealAccess> {
    let access = match meals.owner_session_token(meal_id).await? {
        None => MealAccess::NotFound,
        Some(owner_token) if owner_token != session.token => MealAccess::Forbidden,
        Some(_) => MealAccess::Allowed,
    };
    Ok(access)
}
