//! Server registry.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{association::AssociationRepository, is_foreign_key_violation, server::ServerRepository},
    error::{catalog::CatalogError, AppError},
    model::{
        identity::Identity,
        server::{CreateServerParam, Server, ServerComponent, UpdateServerParam},
    },
    service::brand::validate_name,
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        identity: &Identity,
        param: CreateServerParam,
    ) -> Result<Server, AppError> {
        validate_name(&param.name)?;

        let server = ServerRepository::new(self.db).create(param).await?;

        tracing::info!("{} created server {} ({})", identity, server.id, server.name);

        Ok(server)
    }

    /// Gets a server by id, failing with NotFound when it does not exist.
    pub async fn get(&self, id: i32) -> Result<Server, AppError> {
        ServerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Server", id))
    }

    /// Gets all servers ordered by id.
    pub async fn list(&self) -> Result<Vec<Server>, AppError> {
        Ok(ServerRepository::new(self.db).get_all().await?)
    }

    /// Renames a server. Attached components are unaffected.
    pub async fn update(
        &self,
        identity: &Identity,
        param: UpdateServerParam,
    ) -> Result<Server, AppError> {
        validate_name(&param.name)?;

        self.get(param.id).await?;

        let server = ServerRepository::new(self.db).update(param).await?;

        tracing::info!("{} renamed server {} to {}", identity, server.id, server.name);

        Ok(server)
    }

    /// Deletes a server no component is attached to.
    ///
    /// An attach landing between the edge count and the delete is caught by the
    /// foreign key on the edge table and reported the same way.
    ///
    /// # Returns
    /// - `Ok(())` - The server was deleted
    /// - `Err(AppError::CatalogErr(NotFound))` - No server with that id
    /// - `Err(AppError::CatalogErr(Conflict))` - Components are still attached
    pub async fn delete(&self, identity: &Identity, id: i32) -> Result<(), AppError> {
        self.get(id).await?;

        let edges = AssociationRepository::new(self.db)
            .count_for_server(id)
            .await?;

        if edges > 0 {
            return Err(CatalogError::Conflict(format!(
                "Server {} still has {} attached component(s)",
                id, edges
            ))
            .into());
        }

        ServerRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    CatalogError::Conflict(format!(
                        "Server {} still has attached component(s)",
                        id
                    ))
                    .into()
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::info!("{} deleted server {}", identity, id);

        Ok(())
    }

    /// Gets the components attached to a server ordered by kind, then id.
    pub async fn components_for(&self, id: i32) -> Result<Vec<ServerComponent>, AppError> {
        self.get(id).await?;

        Ok(AssociationRepository::new(self.db)
            .components_for_server(id)
            .await?)
    }
}
