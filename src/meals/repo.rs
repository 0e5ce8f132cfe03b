use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::SessionToken;
use crate::db::datetime_text;

#[derive(Debug, Clone, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub date: OffsetDateTime,
    pub is_in_diet: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields required to insert a meal.
#[derive(Debug)]
pub struct NewMeal {
    pub name: String,
    pub description: String,
    pub date: OffsetDateTime,
    pub is_in_diet: bool,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Default)]
pub struct MealChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<OffsetDateTime>,
    pub is_in_diet: Option<bool>,
}

impl MealChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.is_in_diet.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct MealRepository {
    db: SqlitePool,
}

impl MealRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: Uuid, meal: NewMeal) -> sqlx::Result<Meal> {
        let now = datetime_text(OffsetDateTime::now_utc());
        sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, user_id, name, description, date, is_in_diet, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, user_id, name, description, date, is_in_diet, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(meal.name)
        .bind(meal.description)
        .bind(datetime_text(meal.date))
        .bind(meal.is_in_diet)
        .bind(now.clone())
        .bind(now)
        .fetch_one(&self.db)
        .await
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> sqlx::Result<Vec<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, date, is_in_diet, created_at, updated_at
            FROM meals
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
    }

    /// Meals for the metrics pass, newest date first. The order of this
    /// query is the order the streak computation runs over; `date` is
    /// fixed-width TEXT (see `db::datetime_text`), so TEXT order is
    /// chronological.
    pub async fn list_for_user_by_date_desc(&self, user_id: Uuid) -> sqlx::Result<Vec<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, date, is_in_diet, created_at, updated_at
            FROM meals
            WHERE user_id = ?
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
    }

    /// Direct id + owner filter; the read path's ownership check.
    pub async fn find_for_user(&self, user_id: Uuid, meal_id: Uuid) -> sqlx::Result<Option<Meal>> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, date, is_in_diet, created_at, updated_at
            FROM meals
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
    }

    /// Session token of the meal's owning user, if the meal exists.
    pub async fn owner_session_token(&self, meal_id: Uuid) -> sqlx::Result<Option<SessionToken>> {
        sqlx::query_scalar::<_, SessionToken>(
            r#"
            SELECT users.session_id
            FROM meals
            JOIN users ON users.id = meals.user_id
            WHERE meals.id = ?
            "#,
        )
        .bind(meal_id)
        .fetch_optional(&self.db)
        .await
    }

    /// Applies the present fields and stamps `updated_at`. Callers skip
    /// the call entirely when `changes.is_empty()`.
    pub async fn update(&self, meal_id: Uuid, changes: MealChanges) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE meals
            SET name = COALESCE(?, name),
                description = COALESCE(?, description),
                date = COALESCE(?, date),
                is_in_diet = COALESCE(?, is_in_diet),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.name)
        .bind(changes.description)
        .bind(changes.date.map(datetime_text))
        .bind(changes.is_in_diet)
        .bind(datetime_text(OffsetDateTime::now_utc()))
        .bind(meal_id)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    /// Unconditional delete; existence is the authorization check's concern.
    pub async fn delete(&self, meal_id: Uuid) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM meals WHERE id = ?")
            .bind(meal_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
