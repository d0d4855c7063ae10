//! Image reference store.
//!
//! Images are plain URL records. Each one is created for, and owned by, a single
//! component; the unique index on `component.image_id` keeps it that way.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::image::Image;

pub struct ImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, url: String) -> Result<Image, DbErr> {
        let image = entity::image::ActiveModel {
            url: ActiveValue::Set(url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Image::from_entity(image))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Image>, DbErr> {
        let image = entity::prelude::Image::find_by_id(id).one(self.db).await?;

        Ok(image.map(Image::from_entity))
    }

    /// Fetches several images in one query, keyed by id.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Image>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let images = entity::prelude::Image::find()
            .filter(entity::image::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|i| (i.id, Image::from_entity(i)))
            .collect();

        Ok(images)
    }

    /// Deletes an image record.
    ///
    /// # Returns
    /// - `Ok(true)` - The image was deleted
    /// - `Ok(false)` - No image with that id existed
    /// - `Err(DbErr)` - Database error, including a foreign key violation while a
    ///   component still references the image
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Image::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
