//! Component endpoints shared by all eight kinds.
//!
//! The kind is a path segment parsed into `ComponentKind`; an unregistered kind
//! yields 404 before any service is called.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        component::{ComponentDto, CreateComponentDto, UpdateComponentDto},
        server::ServerDto,
    },
    server::{
        error::AppError,
        middleware::session::IdentitySession,
        model::{
            component::{CreateComponentParam, HydratedComponent, UpdateComponentParam},
            kind::ComponentKind,
            server::Server,
        },
        service::{association::AssociationService, catalog::CatalogService},
        state::AppState,
    },
};

/// Tag for grouping component endpoints in OpenAPI documentation
pub static COMPONENT_TAG: &str = "component";

/// List every component of a kind, ordered by id.
///
/// # Returns
/// - `200 OK` - Hydrated components with brand, image and servers
/// - `404 Not Found` - Unknown kind, or a component's brand/image reference dangles
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/components/{kind}",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`")
    ),
    responses(
        (status = 200, description = "Components of the kind", body = Vec<ComponentDto>),
        (status = 404, description = "Unknown component kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_components(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;

    let components = CatalogService::new(&state.db, &state.locks)
        .list(kind)
        .await?;

    let components = components
        .into_iter()
        .map(HydratedComponent::into_dto)
        .collect::<Result<Vec<ComponentDto>, _>>()?;

    Ok((StatusCode::OK, Json(components)))
}

/// Create a component of a kind.
///
/// `attributes` must hold exactly the kind's fields, see `GET /api/schemas/{kind}`.
///
/// # Returns
/// - `201 Created` - The hydrated component
/// - `400 Bad Request` - Invalid name, price or attributes
/// - `404 Not Found` - Unknown kind, brand or server
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/components/{kind}",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`")
    ),
    request_body = CreateComponentDto,
    responses(
        (status = 201, description = "Component created", body = ComponentDto),
        (status = 400, description = "Invalid component data", body = ErrorDto),
        (status = 404, description = "Unknown kind, brand or server", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_component(
    State(state): State<AppState>,
    session: Session,
    Path(kind): Path<String>,
    Json(payload): Json<CreateComponentDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;
    let identity = IdentitySession::new(&session).identity().await?;

    let component = CatalogService::new(&state.db, &state.locks)
        .create(&identity, CreateComponentParam::from_dto(kind, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(component.into_dto()?)))
}

#[utoipa::path(
    get,
    path = "/api/components/{kind}/{id}",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`"),
        ("id" = i32, Path, description = "Component ID")
    ),
    responses(
        (status = 200, description = "The hydrated component", body = ComponentDto),
        (status = 404, description = "Unknown kind or component not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_component(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;

    let component = CatalogService::new(&state.db, &state.locks)
        .get(kind, id)
        .await?;

    Ok((StatusCode::OK, Json(component.into_dto()?)))
}

/// Replace a component's fields.
///
/// `image_url` replaces the current image; `remove_image` drops it. The previous
/// image record is deleted best-effort. Attached servers are unchanged.
///
/// # Returns
/// - `200 OK` - The updated component
/// - `400 Bad Request` - Invalid name, price or attributes
/// - `404 Not Found` - Unknown kind, component or brand
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/components/{kind}/{id}",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`"),
        ("id" = i32, Path, description = "Component ID")
    ),
    request_body = UpdateComponentDto,
    responses(
        (status = 200, description = "Component updated", body = ComponentDto),
        (status = 400, description = "Invalid component data", body = ErrorDto),
        (status = 404, description = "Unknown kind, component or brand", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_component(
    State(state): State<AppState>,
    session: Session,
    Path((kind, id)): Path<(String, i32)>,
    Json(payload): Json<UpdateComponentDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;
    let identity = IdentitySession::new(&session).identity().await?;

    let component = CatalogService::new(&state.db, &state.locks)
        .update(&identity, UpdateComponentParam::from_dto(kind, id, payload))
        .await?;

    Ok((StatusCode::OK, Json(component.into_dto()?)))
}

/// Delete a component.
///
/// Detaches all servers, removes the component and then its image.
///
/// # Returns
/// - `204 No Content` - Component deleted
/// - `404 Not Found` - Unknown kind or component not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/components/{kind}/{id}",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`"),
        ("id" = i32, Path, description = "Component ID")
    ),
    responses(
        (status = 204, description = "Component deleted"),
        (status = 404, description = "Unknown kind or component not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_component(
    State(state): State<AppState>,
    session: Session,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;
    let identity = IdentitySession::new(&session).identity().await?;

    CatalogService::new(&state.db, &state.locks)
        .delete(&identity, kind, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the servers attached to a component, ordered by server id.
#[utoipa::path(
    get,
    path = "/api/components/{kind}/{id}/servers",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`"),
        ("id" = i32, Path, description = "Component ID")
    ),
    responses(
        (status = 200, description = "Attached servers", body = Vec<ServerDto>),
        (status = 404, description = "Unknown component kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_component_servers(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;

    let servers = AssociationService::new(&state.db, &state.locks)
        .servers_for(kind, id)
        .await?;

    let servers: Vec<ServerDto> = servers.into_iter().map(Server::into_dto).collect();

    Ok((StatusCode::OK, Json(servers)))
}

/// Attach a server to a component. Attaching twice is a no-op.
///
/// # Returns
/// - `204 No Content` - Edge present
/// - `404 Not Found` - Unknown kind, component or server
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/components/{kind}/{id}/servers/{server_id}",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`"),
        ("id" = i32, Path, description = "Component ID"),
        ("server_id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Server attached"),
        (status = 404, description = "Unknown kind, component or server", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_server(
    State(state): State<AppState>,
    session: Session,
    Path((kind, id, server_id)): Path<(String, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;
    let identity = IdentitySession::new(&session).identity().await?;

    AssociationService::new(&state.db, &state.locks)
        .attach_server(kind, id, server_id)
        .await?;

    tracing::info!("{} attached server {} to {} {}", identity, server_id, kind, id);

    Ok(StatusCode::NO_CONTENT)
}

/// Detach a server from a component. Detaching a missing edge is a no-op.
#[utoipa::path(
    delete,
    path = "/api/components/{kind}/{id}/servers/{server_id}",
    tag = COMPONENT_TAG,
    params(
        ("kind" = String, Path, description = "Component kind, e.g. `chassis`"),
        ("id" = i32, Path, description = "Component ID"),
        ("server_id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Server detached"),
        (status = 404, description = "Unknown component kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_server(
    State(state): State<AppState>,
    session: Session,
    Path((kind, id, server_id)): Path<(String, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ComponentKind>()?;
    let identity = IdentitySession::new(&session).identity().await?;

    AssociationService::new(&state.db, &state.locks)
        .detach_server(kind, id, server_id)
        .await?;

    tracing::info!("{} detached server {} from {} {}", identity, server_id, kind, id);

    Ok(StatusCode::NO_CONTENT)
}
