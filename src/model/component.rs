use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{brand::BrandDto, server::ServerDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ImageDto {
    pub id: i32,
    pub url: String,
}

/// Fully-hydrated component as consumed by list and detail views.
///
/// `image` is `null` when the component has no image; `servers` is ordered by
/// ascending server id.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ComponentDto {
    pub id: i32,
    pub kind: String,
    pub name: String,
    pub price: f64,
    pub brand: BrandDto,
    pub image: Option<ImageDto>,
    /// Kind-specific fields, see `GET /api/schemas/{kind}`.
    #[schema(value_type = Object)]
    pub attributes: serde_json::Value,
    pub servers: Vec<ServerDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateComponentDto {
    pub name: String,
    pub brand_id: i32,
    pub price: f64,
    pub image_url: Option<String>,
    #[schema(value_type = Object)]
    pub attributes: serde_json::Value,
    #[serde(default)]
    pub server_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateComponentDto {
    pub name: String,
    pub brand_id: i32,
    pub price: f64,
    /// Replaces the current image when set.
    pub image_url: Option<String>,
    /// Removes the current image; ignored when `image_url` is set.
    #[serde(default)]
    pub remove_image: bool,
    #[schema(value_type = Object)]
    pub attributes: serde_json::Value,
}
