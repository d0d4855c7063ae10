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
        server::{CreateServerDto, ServerComponentDto, ServerDto, UpdateServerDto},
    },
    server::{
        error::AppError,
        middleware::session::IdentitySession,
        model::server::{CreateServerParam, Server, ServerComponent, UpdateServerParam},
        service::server::ServerService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List all servers ordered by id.
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "All servers", body = Vec<ServerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let servers = ServerService::new(&state.db).list().await?;

    let servers: Vec<ServerDto> = servers.into_iter().map(Server::into_dto).collect();

    Ok((StatusCode::OK, Json(servers)))
}

#[utoipa::path(
    post,
    path = "/api/servers",
    tag = SERVER_TAG,
    request_body = CreateServerDto,
    responses(
        (status = 201, description = "Server created", body = ServerDto),
        (status = 400, description = "Invalid server data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = IdentitySession::new(&session).identity().await?;

    let server = ServerService::new(&state.db)
        .create(&identity, CreateServerParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "The server", body = ServerDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let server = ServerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    request_body = UpdateServerDto,
    responses(
        (status = 200, description = "Server renamed", body = ServerDto),
        (status = 400, description = "Invalid server data", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = IdentitySession::new(&session).identity().await?;

    let server = ServerService::new(&state.db)
        .update(&identity, UpdateServerParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Delete a server.
///
/// Fails while any component is still attached; detach them first.
///
/// # Returns
/// - `204 No Content` - Server deleted
/// - `404 Not Found` - Server does not exist
/// - `409 Conflict` - Components are still attached
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Server deleted"),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 409, description = "Components are still attached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = IdentitySession::new(&session).identity().await?;

    ServerService::new(&state.db).delete(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the components attached to a server, ordered by kind then id.
#[utoipa::path(
    get,
    path = "/api/servers/{id}/components",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Attached components", body = Vec<ServerComponentDto>),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_components(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let components = ServerService::new(&state.db).components_for(id).await?;

    let components: Vec<ServerComponentDto> = components
        .into_iter()
        .map(ServerComponent::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(components)))
}
