//! Component to server association edges.
//!
//! Edges are keyed by `(component_kind, component_id, server_id)` and carry no other
//! data. The repository does no locking of its own; callers that need the
//! check-then-write methods to be atomic per component hold the component's lock.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    kind::ComponentKind,
    server::{Server, ServerComponent},
};

pub struct AssociationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssociationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an edge unless it is already present.
    ///
    /// # Returns
    /// - `Ok(true)` - A new edge was inserted
    /// - `Ok(false)` - The edge already existed
    /// - `Err(DbErr)` - Database error
    pub async fn insert_if_absent(
        &self,
        kind: ComponentKind,
        component_id: i32,
        server_id: i32,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::ComponentServer::find_by_id((
            kind.as_str().to_string(),
            component_id,
            server_id,
        ))
        .one(self.db)
        .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::component_server::ActiveModel {
            component_kind: ActiveValue::Set(kind.as_str().to_string()),
            component_id: ActiveValue::Set(component_id),
            server_id: ActiveValue::Set(server_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Deletes one edge.
    ///
    /// # Returns
    /// - `Ok(true)` - The edge was removed
    /// - `Ok(false)` - There was no such edge
    pub async fn delete(
        &self,
        kind: ComponentKind,
        component_id: i32,
        server_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::ComponentServer::delete_by_id((
            kind.as_str().to_string(),
            component_id,
            server_id,
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every edge of a component and returns how many were removed.
    pub async fn delete_all_for_component(
        &self,
        kind: ComponentKind,
        component_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::ComponentServer::delete_many()
            .filter(entity::component_server::Column::ComponentKind.eq(kind.as_str()))
            .filter(entity::component_server::Column::ComponentId.eq(component_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the servers attached to a component ordered by server id.
    pub async fn servers_for(
        &self,
        kind: ComponentKind,
        component_id: i32,
    ) -> Result<Vec<Server>, DbErr> {
        let servers = entity::prelude::Server::find()
            .inner_join(entity::prelude::ComponentServer)
            .filter(entity::component_server::Column::ComponentKind.eq(kind.as_str()))
            .filter(entity::component_server::Column::ComponentId.eq(component_id))
            .order_by_asc(entity::server::Column::Id)
            .all(self.db)
            .await?;

        Ok(servers.into_iter().map(Server::from_entity).collect())
    }

    /// Gets the attached servers of several components of one kind in a single query.
    ///
    /// Components without edges are absent from the map. Each list is ordered by
    /// server id.
    pub async fn servers_for_many(
        &self,
        kind: ComponentKind,
        component_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<Server>>, DbErr> {
        if component_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let edges = entity::prelude::ComponentServer::find()
            .filter(entity::component_server::Column::ComponentKind.eq(kind.as_str()))
            .filter(entity::component_server::Column::ComponentId.is_in(component_ids))
            .order_by_asc(entity::component_server::Column::ServerId)
            .find_also_related(entity::prelude::Server)
            .all(self.db)
            .await?;

        let mut servers: HashMap<i32, Vec<Server>> = HashMap::new();
        for (edge, server) in edges {
            let Some(server) = server else {
                continue;
            };

            servers
                .entry(edge.component_id)
                .or_default()
                .push(Server::from_entity(server));
        }

        Ok(servers)
    }

    /// Gets the components attached to a server ordered by kind name, then id.
    pub async fn components_for_server(
        &self,
        server_id: i32,
    ) -> Result<Vec<ServerComponent>, DbErr> {
        let edges = entity::prelude::ComponentServer::find()
            .filter(entity::component_server::Column::ServerId.eq(server_id))
            .order_by_asc(entity::component_server::Column::ComponentKind)
            .order_by_asc(entity::component_server::Column::ComponentId)
            .all(self.db)
            .await?;

        edges.into_iter().map(ServerComponent::from_edge).collect()
    }

    /// Counts edges that reference a server.
    pub async fn count_for_server(&self, server_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ComponentServer::find()
            .filter(entity::component_server::Column::ServerId.eq(server_id))
            .count(self.db)
            .await
    }
}
