//! Route table and OpenAPI documentation.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{brand, component, schema, server},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hardware Catalog API"),
    tags(
        (name = "brand", description = "Brand registry"),
        (name = "server", description = "Server registry"),
        (name = "schema", description = "Component attribute schemas"),
        (name = "component", description = "Components of every kind and their servers")
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(brand::list_brands, brand::create_brand))
        .routes(routes!(
            brand::get_brand,
            brand::update_brand,
            brand::delete_brand
        ))
        .routes(routes!(server::list_servers, server::create_server))
        .routes(routes!(
            server::get_server,
            server::update_server,
            server::delete_server
        ))
        .routes(routes!(server::get_server_components))
        .routes(routes!(schema::list_schemas))
        .routes(routes!(schema::get_schema))
        .routes(routes!(
            component::list_components,
            component::create_component
        ))
        .routes(routes!(
            component::get_component,
            component::update_component,
            component::delete_component
        ))
        .routes(routes!(component::get_component_servers))
        .routes(routes!(component::attach_server, component::detach_server))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
