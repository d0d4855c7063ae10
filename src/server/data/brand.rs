//! Brand data repository.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::brand::{Brand, CreateBrandParam, UpdateBrandParam};

pub struct BrandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateBrandParam) -> Result<Brand, DbErr> {
        let brand = entity::brand::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Brand::from_entity(brand))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Brand>, DbErr> {
        let brand = entity::prelude::Brand::find_by_id(id).one(self.db).await?;

        Ok(brand.map(Brand::from_entity))
    }

    /// Fetches several brands in one query, keyed by id.
    ///
    /// Ids without a matching record are simply absent from the map.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Brand>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let brands = entity::prelude::Brand::find()
            .filter(entity::brand::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, Brand::from_entity(b)))
            .collect();

        Ok(brands)
    }

    /// Gets all brands ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Brand>, DbErr> {
        let brands = entity::prelude::Brand::find()
            .order_by_asc(entity::brand::Column::Id)
            .all(self.db)
            .await?;

        Ok(brands.into_iter().map(Brand::from_entity).collect())
    }

    /// Renames a brand.
    ///
    /// # Returns
    /// - `Ok(Brand)` - The updated brand
    /// - `Err(DbErr::RecordNotFound)` - No brand with that id
    pub async fn update(&self, param: UpdateBrandParam) -> Result<Brand, DbErr> {
        let brand = entity::prelude::Brand::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Brand with id {} not found", param.id)))?;

        let mut active_model = brand.into_active_model();
        active_model.name = ActiveValue::Set(param.name);

        let brand = active_model.update(self.db).await?;

        Ok(Brand::from_entity(brand))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Brand::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
