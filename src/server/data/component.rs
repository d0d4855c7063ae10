//! Component data repository.
//!
//! All eight kinds live in the single `component` table. Every lookup filters on the
//! kind as well as the id, so `(chassis, 3)` is never found as `(ram, 3)`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    component::{Component, ComponentRecord},
    kind::ComponentKind,
};

pub struct ComponentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComponentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a component row.
    ///
    /// # Arguments
    /// - `record` - Column values; the kind is taken from the attributes
    ///
    /// # Returns
    /// - `Ok(Component)` - The created component
    /// - `Err(DbErr)` - Database error, including foreign key violations for a missing
    ///   brand or image
    pub async fn create(&self, record: ComponentRecord) -> Result<Component, DbErr> {
        let attributes = record
            .attributes
            .to_json()
            .map_err(|e| DbErr::Json(e.to_string()))?;

        let component = entity::component::ActiveModel {
            kind: ActiveValue::Set(record.attributes.kind().to_string()),
            name: ActiveValue::Set(record.name),
            brand_id: ActiveValue::Set(record.brand_id),
            image_id: ActiveValue::Set(record.image_id),
            price: ActiveValue::Set(record.price),
            attributes: ActiveValue::Set(attributes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Component::from_entity(component)
    }

    pub async fn find_by_id(
        &self,
        kind: ComponentKind,
        id: i32,
    ) -> Result<Option<Component>, DbErr> {
        let component = entity::prelude::Component::find_by_id(id)
            .filter(entity::component::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?;

        component.map(Component::from_entity).transpose()
    }

    pub async fn exists(&self, kind: ComponentKind, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Component::find_by_id(id)
            .filter(entity::component::Column::Kind.eq(kind.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every component of a kind ordered by id.
    pub async fn get_all_by_kind(&self, kind: ComponentKind) -> Result<Vec<Component>, DbErr> {
        let components = entity::prelude::Component::find()
            .filter(entity::component::Column::Kind.eq(kind.as_str()))
            .order_by_asc(entity::component::Column::Id)
            .all(self.db)
            .await?;

        components.into_iter().map(Component::from_entity).collect()
    }

    /// Overwrites every column of an existing component.
    ///
    /// # Returns
    /// - `Ok(Component)` - The updated component
    /// - `Err(DbErr::RecordNotFound)` - No component of that kind with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, record: ComponentRecord) -> Result<Component, DbErr> {
        let kind = record.attributes.kind();
        let attributes = record
            .attributes
            .to_json()
            .map_err(|e| DbErr::Json(e.to_string()))?;

        let component = entity::prelude::Component::find_by_id(id)
            .filter(entity::component::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("{} {} not found", kind, id)))?;

        let mut active_model = component.into_active_model();
        active_model.name = ActiveValue::Set(record.name);
        active_model.brand_id = ActiveValue::Set(record.brand_id);
        active_model.image_id = ActiveValue::Set(record.image_id);
        active_model.price = ActiveValue::Set(record.price);
        active_model.attributes = ActiveValue::Set(attributes);

        let component = active_model.update(self.db).await?;

        Component::from_entity(component)
    }

    /// Deletes a component row.
    ///
    /// # Returns
    /// - `Ok(true)` - The component was deleted
    /// - `Ok(false)` - No component of that kind with that id
    /// - `Err(DbErr)` - Database error, including a foreign key violation while
    ///   association edges still reference the component
    pub async fn delete(&self, kind: ComponentKind, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Component::delete_many()
            .filter(entity::component::Column::Id.eq(id))
            .filter(entity::component::Column::Kind.eq(kind.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts components of any kind that reference a brand.
    pub async fn count_by_brand(&self, brand_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Component::find()
            .filter(entity::component::Column::BrandId.eq(brand_id))
            .count(self.db)
            .await
    }
}
