//! Image factory for creating test image entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an image with a unique URL.
pub async fn create_image(db: &DatabaseConnection) -> Result<entity::image::Model, DbErr> {
    create_image_with_url(db, format!("https://cdn.example.com/images/{}.png", next_id())).await
}

/// Creates an image pointing at the given URL.
pub async fn create_image_with_url(
    db: &DatabaseConnection,
    url: impl Into<String>,
) -> Result<entity::image::Model, DbErr> {
    entity::image::ActiveModel {
        url: ActiveValue::Set(url.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
