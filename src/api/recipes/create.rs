use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::identity;
use crate::models::Recipe;
use crate::validation::{self, RecipeDraft};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// All fields are optional at the deserialization layer so that missing
/// required fields surface as one collected validation failure instead of a
/// body-rejection.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    /// One of Breakfast, Lunch, Dinner, Dessert, Snack; defaults to Dinner.
    pub category: Option<String>,
    /// Owner identity; the anonymous placeholder is used when absent.
    pub owner: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub success: bool,
    pub message: String,
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = CreateRecipeResponse),
        (status = 400, description = "Field constraints violated", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<CreateRecipeResponse>), ApiError> {
    let owner = identity::resolve_owner(request.owner);

    let draft = RecipeDraft {
        title: request.title,
        ingredients: request.ingredients,
        steps: request.steps,
        category: request.category,
    };
    let valid = validation::validate(draft).map_err(ApiError::Validation)?;

    let recipe = store.create(&valid, owner)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRecipeResponse {
            success: true,
            message: "Recipe created".to_string(),
            data: recipe,
        }),
    ))
}
