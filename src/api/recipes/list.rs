use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Recipe;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, newest first", body = ListRecipesResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(store): State<AppState>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let recipes = store.list_all()?;

    Ok(Json(ListRecipesResponse {
        success: true,
        count: recipes.len(),
        data: recipes,
    }))
}
