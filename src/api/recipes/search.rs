use crate::api::recipes::list::ListRecipesResponse;
use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Text to match, case-insensitively, as a substring of a recipe's
    /// title, any of its ingredients, or its category.
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/search",
    tag = "recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes", body = ListRecipesResponse),
        (status = 400, description = "Missing query parameter", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(store): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let recipes = store.search(params.q.as_deref().unwrap_or_default())?;

    Ok(Json(ListRecipesResponse {
        success: true,
        count: recipes.len(),
        data: recipes,
    }))
}
