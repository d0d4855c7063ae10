use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, schema::SchemaDto},
    server::{
        error::AppError,
        model::{
            kind::ComponentKind,
            schema::{schema_of, ComponentSchema},
        },
    },
};

/// Tag for grouping schema endpoints in OpenAPI documentation
pub static SCHEMA_TAG: &str = "schema";

/// List the attribute schema of every component kind.
#[utoipa::path(
    get,
    path = "/api/schemas",
    tag = SCHEMA_TAG,
    responses(
        (status = 200, description = "Schemas of all kinds", body = Vec<SchemaDto>)
    ),
)]
pub async fn list_schemas() -> impl IntoResponse {
    let schemas: Vec<SchemaDto> = ComponentKind::ALL
        .into_iter()
        .map(schema_of)
        .map(ComponentSchema::into_dto)
        .collect();

    (StatusCode::OK, Json(schemas))
}

/// Get the attribute schema of one component kind.
///
/// # Returns
/// - `200 OK` - Common and kind-specific fields
/// - `404 Not Found` - Unknown kind
#[utoipa::path(
    get,
    path = "/api/schemas/{kind}",
    tag = SCHEMA_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `power_supply`")
    ),
    responses(
        (status = 200, description = "The kind's schema", body = SchemaDto),
        (status = 404, description = "Unknown component kind", body = ErrorDto)
    ),
)]
pub async fn get_schema(Path(kind): Path<String>) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;

    Ok((StatusCode::OK, Json(schema_of(kind).into_dto())))
}
