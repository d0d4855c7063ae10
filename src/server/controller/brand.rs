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
        brand::{BrandDto, CreateBrandDto, UpdateBrandDto},
    },
    server::{
        error::AppError,
        middleware::session::IdentitySession,
        model::brand::{Brand, CreateBrandParam, UpdateBrandParam},
        service::brand::BrandService,
        state::AppState,
    },
};

/// Tag for grouping brand endpoints in OpenAPI documentation
pub static BRAND_TAG: &str = "brand";

/// List all brands ordered by id.
#[utoipa::path(
    get,
    path = "/api/brands",
    tag = BRAND_TAG,
    responses(
        (status = 200, description = "All brands", body = Vec<BrandDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_brands(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let brands = BrandService::new(&state.db).list().await?;

    let brands: Vec<BrandDto> = brands.into_iter().map(Brand::into_dto).collect();

    Ok((StatusCode::OK, Json(brands)))
}

/// Create a brand.
///
/// # Returns
/// - `201 Created` - Brand created
/// - `400 Bad Request` - Blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/brands",
    tag = BRAND_TAG,
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created", body = BrandDto),
        (status = 400, description = "Invalid brand data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = IdentitySession::new(&session).identity().await?;

    let brand = BrandService::new(&state.db)
        .create(&identity, CreateBrandParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(brand.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    tag = BRAND_TAG,
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "The brand", body = BrandDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let brand = BrandService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Rename a brand.
///
/// Brands referenced by any component cannot be changed.
///
/// # Returns
/// - `200 OK` - Brand renamed
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - Brand does not exist
/// - `409 Conflict` - Brand is referenced by a component
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    tag = BRAND_TAG,
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand renamed", body = BrandDto),
        (status = 400, description = "Invalid brand data", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 409, description = "Brand is referenced by a component", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_brand(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = IdentitySession::new(&session).identity().await?;

    let brand = BrandService::new(&state.db)
        .update(&identity, UpdateBrandParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Delete a brand.
///
/// # Returns
/// - `204 No Content` - Brand deleted
/// - `404 Not Found` - Brand does not exist
/// - `409 Conflict` - Brand is referenced by a component
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    tag = BRAND_TAG,
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 409, description = "Brand is referenced by a component", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = IdentitySession::new(&session).identity().await?;

    BrandService::new(&state.db).delete(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
