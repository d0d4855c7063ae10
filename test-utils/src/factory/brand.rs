//! Brand factory for creating test brand entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test brands with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let brand = BrandFactory::new(&db).id(1).name("Dell").build().await?;
/// ```
pub struct BrandFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
}

impl<'a> BrandFactory<'a> {
    /// Creates a new BrandFactory with an auto-assigned ID and the name `"Brand {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("Brand {}", next_id()),
        }
    }

    /// Sets an explicit primary key instead of the auto-incremented one.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the brand entity into the database.
    pub async fn build(self) -> Result<entity::brand::Model, DbErr> {
        entity::brand::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a brand with default values.
pub async fn create_brand(db: &DatabaseConnection) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db).build().await
}
