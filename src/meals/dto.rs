use serde::{Deserialize, Deserializer, Serialize};
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

use super::repo::{Meal, MealChanges, NewMeal};

/// Deserializes a field that may be absent but, when present, must carry
/// a value. Serde's plain `Option` treats JSON `null` as `None`; here
/// `null` is a type error instead, so it surfaces as a 400.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Same as [`present`], parsing the value as an RFC 3339 timestamp.
fn present_rfc3339<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    time::serde::rfc3339::deserialize(deserializer).map(Some)
}

/// Meal creation body. `date` falls back to the insertion time when
/// absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub name: String,
    pub description: String,
    pub is_in_diet: bool,
    #[serde(default, deserialize_with = "present_rfc3339")]
    pub date: Option<OffsetDateTime>,
}

impl CreateMealRequest {
    pub fn into_new_meal(self) -> NewMeal {
        let date = self
            .date
            .map(|d| d.to_offset(UtcOffset::UTC))
            .unwrap_or_else(OffsetDateTime::now_utc);
        NewMeal {
            name: self.name,
            description: self.description,
            date,
            is_in_diet: self.is_in_diet,
        }
    }
}

/// Meal update body; every field optional, unknown fields ignored.
/// A field that is present must not be `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub is_in_diet: Option<bool>,
    #[serde(default, deserialize_with = "present_rfc3339")]
    pub date: Option<OffsetDateTime>,
}

impl From<UpdateMealRequest> for MealChanges {
    fn from(req: UpdateMealRequest) -> Self {
        MealChanges {
            name: req.name,
            description: req.description,
            date: req.date.map(|d| d.to_offset(UtcOffset::UTC)),
            is_in_diet: req.is_in_diet,
        }
    }
}

/// Meal as returned to clients: the stored row with RFC 3339 timestamps.
#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub is_in_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Meal> for MealResponse {
    fn from(m: Meal) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            description: m.description,
            date: m.date,
            is_in_diet: m.is_in_diet,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<MealResponse>,
}
