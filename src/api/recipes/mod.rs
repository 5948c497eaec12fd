pub mod by_user;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod popular;
pub mod search;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for recipe endpoints (mounted at /api/v1/recipes).
///
/// axum matches the literal segments (`user`, `search`, `popular`) before
/// the `/{id}` capture, so those paths are never misread as identifiers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/user/{user_id}", get(by_user::get_recipes_by_user))
        .route("/search", get(search::search_recipes))
        .route("/popular", get(popular::get_popular_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        by_user::get_recipes_by_user,
        search::search_recipes,
        popular::get_popular_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        list::ListRecipesResponse,
        create::CreateRecipeRequest,
        create::CreateRecipeResponse,
        get::RecipeResponse,
        update::UpdateRecipeRequest,
        update::UpdateRecipeResponse,
        delete::DeleteRecipeResponse,
    ))
)]
pub struct ApiDoc;
