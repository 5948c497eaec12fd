use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Recipe;
use crate::store;
use crate::validation::RecipeDraft;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Partial patch: only the supplied fields change. The merged record is
/// re-validated against the same constraints as a create.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateRecipeResponse {
    pub success: bool,
    pub message: String,
    pub data: Recipe,
}

#[utoipa::path(
    put,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = UpdateRecipeResponse),
        (status = 400, description = "Field constraints violated", body = ErrorResponse),
        (status = 404, description = "Recipe absent or id malformed", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Json<UpdateRecipeResponse>, ApiError> {
    let id = store::parse_id(&id)?;

    let patch = RecipeDraft {
        title: request.title,
        ingredients: request.ingredients,
        steps: request.steps,
        category: request.category,
    };
    let recipe = store.update(id, patch)?;

    Ok(Json(UpdateRecipeResponse {
        success: true,
        message: "Recipe updated".to_string(),
        data: recipe,
    }))
}
