use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Relational-integrity failures raised by the catalog.
///
/// None of these are retried internally; they indicate either caller error or
/// legitimate absence.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Requested record does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Component kind outside the eight registered kinds.
    ///
    /// Results in a 404 Not Found response since the kind addresses a collection
    /// that does not exist.
    #[error("Unknown component kind '{0}'")]
    UnknownKind(String),

    /// Brand or server is still referenced and cannot be changed or deleted.
    ///
    /// Results in a 409 Conflict response. The caller must detach the references first.
    #[error("{0}")]
    Conflict(String),

    /// Create/update payload does not satisfy the component schema.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{0}")]
    InvalidPayload(String),

    /// Best-effort image removal after a component change failed.
    ///
    /// Only ever logged. The component change itself has already succeeded and the
    /// orphaned image record is left for later cleanup.
    #[error("Failed to remove orphaned image {image_id}: {source}")]
    OrphanCleanupFailure {
        image_id: i32,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } | Self::UnknownKind(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::OrphanCleanupFailure { .. } => {
                tracing::error!("{}", self);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
