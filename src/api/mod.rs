pub mod recipes;

use crate::models::Recipe;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error envelope used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse, Recipe)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let module_spec = recipes::ApiDoc::openapi();
    spec.paths.paths.extend(module_spec.paths.paths);
    if let Some(module_components) = module_spec.components {
        if let Some(spec_components) = spec.components.as_mut() {
            spec_components.schemas.extend(module_components.schemas);
        }
    }

    spec
}
