//! Component factory for creating test component entities.
//!
//! Default values are sourced from the component fixture, so every kind receives an
//! attribute payload that satisfies its schema.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{
    entity::prelude::Json, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr,
};

/// Factory for creating test components with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let chassis = ComponentFactory::new(&db, "chassis", brand.id)
///     .id(3)
///     .name("ChassisX")
///     .build()
///     .await?;
/// ```
pub struct ComponentFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    entity: entity::component::Model,
}

impl<'a> ComponentFactory<'a> {
    /// Creates a new ComponentFactory for the given kind and brand.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `kind` - Component kind name
    /// - `brand_id` - Brand the component belongs to
    pub fn new(db: &'a DatabaseConnection, kind: &str, brand_id: i32) -> Self {
        let entity = fixture::component::entity_builder()
            .kind(kind)
            .brand_id(brand_id)
            .name(format!("{} {}", kind, next_id()))
            .build();

        Self {
            db,
            id: None,
            entity,
        }
    }

    /// Sets an explicit primary key instead of the auto-incremented one.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn image_id(mut self, image_id: Option<i32>) -> Self {
        self.entity.image_id = image_id;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn attributes(mut self, attributes: Json) -> Self {
        self.entity.attributes = attributes;
        self
    }

    /// Builds and inserts the component entity into the database.
    pub async fn build(self) -> Result<entity::component::Model, DbErr> {
        entity::component::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            kind: ActiveValue::Set(self.entity.kind),
            name: ActiveValue::Set(self.entity.name),
            brand_id: ActiveValue::Set(self.entity.brand_id),
            image_id: ActiveValue::Set(self.entity.image_id),
            price: ActiveValue::Set(self.entity.price),
            attributes: ActiveValue::Set(self.entity.attributes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a component of `kind` with default values.
pub async fn create_component(
    db: &DatabaseConnection,
    kind: &str,
    brand_id: i32,
) -> Result<entity::component::Model, DbErr> {
    ComponentFactory::new(db, kind, brand_id).build().await
}
