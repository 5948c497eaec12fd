//! Record store adapter.
//!
//! `RecipeStore` owns the connection pool and is the only code that talks
//! to the database. It is constructed once at startup and handed to the
//! handlers through axum state; nothing here is ambient or global.
//!
//! Queries run synchronously on a pooled connection inside the handler's
//! async task. Conflicting writes to the same row (e.g. concurrent view
//! bumps) are single UPDATE statements, so the database serializes them.

use crate::db::DbPool;
use crate::error::ApiError;
use crate::ingredient_ilike;
use crate::models::{NewRecipe, Recipe};
use crate::raw_sql;
use crate::schema::recipes;
use crate::validation::{self, RecipeDraft, ValidRecipe};
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use uuid::Uuid;

/// Number of records returned by the popular ranking when the request
/// doesn't say otherwise.
pub const DEFAULT_POPULAR_LIMIT: i64 = 10;

/// Parse a raw path segment into a store identifier.
///
/// A malformed id is reported as `InvalidIdentifier` (served as 404, naming
/// the offending id) rather than rejected at the routing layer.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidIdentifier(raw.to_string()))
}

/// Merge a partial patch over the current row: fields absent from the
/// patch keep their stored value.
fn merge(current: Recipe, patch: RecipeDraft) -> RecipeDraft {
    RecipeDraft {
        title: patch.title.or(Some(current.title)),
        ingredients: patch.ingredients.or(Some(current.ingredients)),
        steps: patch.steps.or(Some(current.steps)),
        category: patch.category.or(Some(current.category)),
    }
}

/// Reject a missing or empty search query. Whitespace is deliberately not
/// trimmed: any non-empty string is searched as given.
fn require_query(text: &str) -> Result<&str, ApiError> {
    if text.is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter \"q\" is required".to_string(),
        ));
    }
    Ok(text)
}

pub struct RecipeStore {
    pool: DbPool,
}

impl RecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, ApiError> {
        self.pool.get().map_err(|e| ApiError::Pool(e.to_string()))
    }

    /// All recipes, newest first.
    pub fn list_all(&self) -> Result<Vec<Recipe>, ApiError> {
        let mut conn = self.conn()?;
        Ok(recipes::table
            .order(recipes::created_at.desc())
            .select(Recipe::as_select())
            .load(&mut conn)?)
    }

    /// Fetch one recipe and count the view: `views` is bumped by 1 in the
    /// same statement that reads the row, so N fetches mean N increments.
    pub fn fetch_and_count_view(&self, id: Uuid) -> Result<Recipe, ApiError> {
        let mut conn = self.conn()?;
        Ok(diesel::update(recipes::table.find(id))
            .set(recipes::views.eq(recipes::views + 1))
            .returning(Recipe::as_returning())
            .get_result(&mut conn)?)
    }

    /// Insert an already-validated recipe. Id, counters and timestamps come
    /// from the store.
    pub fn create(&self, valid: &ValidRecipe, owner: Uuid) -> Result<Recipe, ApiError> {
        let mut conn = self.conn()?;
        let new_recipe = NewRecipe {
            owner,
            title: &valid.title,
            ingredients: &valid.ingredients,
            steps: &valid.steps,
            category: valid.category.as_str(),
        };

        Ok(diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(Recipe::as_returning())
            .get_result(&mut conn)?)
    }

    /// Partial patch: only the fields present in `patch` change. The merged
    /// result is re-validated against the same constraints as a create
    /// before anything is written.
    pub fn update(&self, id: Uuid, patch: RecipeDraft) -> Result<Recipe, ApiError> {
        let mut conn = self.conn()?;

        let current: Recipe = recipes::table
            .find(id)
            .select(Recipe::as_select())
            .first(&mut conn)?;

        let merged = merge(current, patch);
        let valid = validation::validate(merged).map_err(ApiError::Validation)?;

        Ok(diesel::update(recipes::table.find(id))
            .set((
                recipes::title.eq(&valid.title),
                recipes::ingredients.eq(valid.ingredients.as_slice()),
                recipes::steps.eq(valid.steps.as_slice()),
                recipes::category.eq(valid.category.as_str()),
                recipes::updated_at.eq(Utc::now()),
            ))
            .returning(Recipe::as_returning())
            .get_result(&mut conn)?)
    }

    /// Remove a recipe. `NotFound` if it was never there.
    pub fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(recipes::table.find(id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    /// All recipes belonging to `owner`, newest first. An unknown owner is
    /// an empty list, not an error.
    pub fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Recipe>, ApiError> {
        let mut conn = self.conn()?;
        Ok(recipes::table
            .filter(recipes::owner.eq(owner))
            .order(recipes::created_at.desc())
            .select(Recipe::as_select())
            .load(&mut conn)?)
    }

    /// Case-insensitive substring search across title, any ingredient, and
    /// category.
    pub fn search(&self, text: &str) -> Result<Vec<Recipe>, ApiError> {
        let text = require_query(text)?;

        let pattern = raw_sql::like_pattern(text);

        let mut conn = self.conn()?;
        Ok(recipes::table
            .filter(
                recipes::title
                    .ilike(&pattern)
                    .or(recipes::category.ilike(&pattern))
                    .or(ingredient_ilike!(pattern.as_str())),
            )
            .order(recipes::created_at.desc())
            .select(Recipe::as_select())
            .load(&mut conn)?)
    }

    /// Top recipes by likes, ties broken by views.
    pub fn top_popular(&self, limit: i64) -> Result<Vec<Recipe>, ApiError> {
        let mut conn = self.conn()?;
        Ok(recipes::table
            .order((recipes::likes.desc(), recipes::views.desc()))
            .limit(limit)
            .select(Recipe::as_select())
            .load(&mut conn)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_recipe() -> Recipe {
        Recipe {
            id: Uuid::from_u128(1),
            owner: Uuid::from_u128(2),
            title: "Toast".to_string(),
            ingredients: vec!["bread".to_string()],
            steps: vec!["toast it".to_string()],
            category: "Breakfast".to_string(),
            likes: 0,
            views: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn merge_with_empty_patch_keeps_every_field() {
        let merged = merge(stored_recipe(), RecipeDraft::default());
        assert_eq!(merged.title.as_deref(), Some("Toast"));
        assert_eq!(merged.ingredients, Some(vec!["bread".to_string()]));
        assert_eq!(merged.steps, Some(vec!["toast it".to_string()]));
        assert_eq!(merged.category.as_deref(), Some("Breakfast"));
    }

    #[test]
    fn merge_changes_only_the_supplied_fields() {
        let patch = RecipeDraft {
            title: Some("French toast".to_string()),
            ..RecipeDraft::default()
        };

        let merged = merge(stored_recipe(), patch);
        assert_eq!(merged.title.as_deref(), Some("French toast"));
        assert_eq!(merged.ingredients, Some(vec!["bread".to_string()]));
        assert_eq!(merged.steps, Some(vec!["toast it".to_string()]));
        assert_eq!(merged.category.as_deref(), Some("Breakfast"));
    }

    #[test]
    fn merged_patch_passes_validation_unchanged() {
        let patch = RecipeDraft {
            category: Some("Snack".to_string()),
            ..RecipeDraft::default()
        };

        let valid = validation::validate(merge(stored_recipe(), patch)).unwrap();
        assert_eq!(valid.title, "Toast");
        assert_eq!(valid.category.as_str(), "Snack");
    }

    #[test]
    fn patch_violating_a_constraint_fails_on_the_merged_value() {
        let patch = RecipeDraft {
            title: Some("".to_string()),
            ..RecipeDraft::default()
        };

        let problems = validation::validate(merge(stored_recipe(), patch)).unwrap_err();
        assert_eq!(problems, vec!["Please add a title for the recipe"]);
    }

    #[test]
    fn empty_query_is_rejected() {
        let err = require_query("").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.to_string(), "Query parameter \"q\" is required");
    }

    #[test]
    fn whitespace_query_is_searched_as_given() {
        assert_eq!(require_query("  ").unwrap(), "  ");
    }

    #[test]
    fn non_empty_query_passes_through() {
        assert_eq!(require_query("egg").unwrap(), "egg");
    }

    #[test]
    fn well_formed_id_parses() {
        let id = parse_id("60d0fe4f-1a2e-7631-3b1f-501e00000000").unwrap();
        assert_eq!(id, Uuid::from_u128(0x60d0_fe4f_1a2e_7631_3b1f_501e_0000_0000));
    }

    #[test]
    fn malformed_id_names_the_offender() {
        let err = parse_id("12345").unwrap_err();
        assert_eq!(err.to_string(), "Resource not found with id of 12345");
    }
}
