use crate::api::recipes::list::ListRecipesResponse;
use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::store;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// List a user's recipes. The owner reference is never checked against a
/// user registry; an unknown owner simply yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/user/{user_id}",
    tag = "recipes",
    params(
        ("user_id" = String, Path, description = "Owner identity")
    ),
    responses(
        (status = 200, description = "The owner's recipes, newest first", body = ListRecipesResponse),
        (status = 404, description = "Owner id malformed", body = ErrorResponse)
    )
)]
pub async fn get_recipes_by_user(
    State(store): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let owner = store::parse_id(&user_id)?;

    let recipes = store.list_by_owner(owner)?;

    Ok(Json(ListRecipesResponse {
        success: true,
        count: recipes.len(),
        data: recipes,
    }))
}
