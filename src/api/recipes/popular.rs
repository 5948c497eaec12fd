use crate::api::recipes::list::ListRecipesResponse;
use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::store::DEFAULT_POPULAR_LIMIT;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PopularParams {
    /// Number of items to return (default: 10, max: 50)
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/popular",
    tag = "recipes",
    params(PopularParams),
    responses(
        (status = 200, description = "Top recipes by likes, ties broken by views", body = ListRecipesResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_popular_recipes(
    State(store): State<AppState>,
    Query(params): Query<PopularParams>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_POPULAR_LIMIT).clamp(1, 50);

    let recipes = store.top_popular(limit)?;

    Ok(Json(ListRecipesResponse {
        success: true,
        count: recipes.len(),
        data: recipes,
    }))
}
