//! Checks that the generated OpenAPI spec covers the whole HTTP surface.

use recipebook::api;

fn spec_json() -> serde_json::Value {
    serde_json::to_value(api::openapi()).expect("spec serializes")
}

#[test]
fn spec_covers_every_route() {
    let spec = spec_json();

    // JSON pointers escape `/` in path keys as `~1`.
    let operations = [
        ("/paths/~1api~1v1~1recipes/get", "list"),
        ("/paths/~1api~1v1~1recipes/post", "create"),
        ("/paths/~1api~1v1~1recipes~1user~1{user_id}/get", "by user"),
        ("/paths/~1api~1v1~1recipes~1search/get", "search"),
        ("/paths/~1api~1v1~1recipes~1popular/get", "popular"),
        ("/paths/~1api~1v1~1recipes~1{id}/get", "get by id"),
        ("/paths/~1api~1v1~1recipes~1{id}/put", "update"),
        ("/paths/~1api~1v1~1recipes~1{id}/delete", "delete"),
    ];

    for (pointer, name) in operations {
        assert!(
            spec.pointer(pointer).is_some(),
            "OpenAPI spec is missing the {name} operation ({pointer})"
        );
    }
}

#[test]
fn spec_carries_shared_schemas() {
    let spec = spec_json();

    for schema in ["Recipe", "ErrorResponse", "ListRecipesResponse"] {
        assert!(
            spec.pointer(&format!("/components/schemas/{schema}"))
                .is_some(),
            "OpenAPI spec is missing the {schema} schema"
        );
    }
}

#[test]
fn create_is_the_only_201() {
    let spec = spec_json();

    assert!(spec
        .pointer("/paths/~1api~1v1~1recipes/post/responses/201")
        .is_some());
    assert!(spec
        .pointer("/paths/~1api~1v1~1recipes~1{id}/get/responses/200")
        .is_some());
}
