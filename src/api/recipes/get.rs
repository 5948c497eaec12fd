use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Recipe;
use crate::store;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub success: bool,
    pub data: Recipe,
}

/// Fetch one recipe by id.
///
/// This is a read with a write side effect: every successful fetch bumps
/// the record's view counter by 1, so it is not idempotent under
/// repetition.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe absent or id malformed", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let id = store::parse_id(&id)?;

    let recipe = store.fetch_and_count_view(id)?;

    Ok(Json(RecipeResponse {
        success: true,
        data: recipe,
    }))
}
