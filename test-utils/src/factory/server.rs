//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db).id(7).name("srv-a").build().await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with an auto-assigned ID and the name `"srv-{n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("srv-{}", next_id()),
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

    /// Builds and inserts the server entity into the database.
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
