//! Server data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::server::{CreateServerParam, Server, UpdateServerParam};

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateServerParam) -> Result<Server, DbErr> {
        let server = entity::server::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Server::from_entity(server))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Server>, DbErr> {
        let server = entity::prelude::Server::find_by_id(id).one(self.db).await?;

        Ok(server.map(Server::from_entity))
    }

    /// Gets all servers ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Server>, DbErr> {
        let servers = entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::Id)
            .all(self.db)
            .await?;

        Ok(servers.into_iter().map(Server::from_entity).collect())
    }

    /// Renames a server.
    ///
    /// # Returns
    /// - `Ok(Server)` - The updated server
    /// - `Err(DbErr::RecordNotFound)` - No server with that id
    pub async fn update(&self, param: UpdateServerParam) -> Result<Server, DbErr> {
        let server = entity::prelude::Server::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Server with id {} not found", param.id))
            })?;

        let mut active_model = server.into_active_model();
        active_model.name = ActiveValue::Set(param.name);

        let server = active_model.update(self.db).await?;

        Ok(Server::from_entity(server))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Server::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
