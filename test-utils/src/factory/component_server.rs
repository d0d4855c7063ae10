//! Component-server edge factory.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts an association edge between a component and a server.
///
/// # Arguments
/// - `db` - Database connection
/// - `kind` - Component kind name
/// - `component_id` - Component ID
/// - `server_id` - Server ID
///
/// # Returns
/// - `Ok(entity::component_server::Model)` - Created edge
/// - `Err(DbErr)` - Database error, including duplicate edges
pub async fn create_component_server(
    db: &DatabaseConnection,
    kind: &str,
    component_id: i32,
    server_id: i32,
) -> Result<entity::component_server::Model, DbErr> {
    entity::prelude::ComponentServer::insert(entity::component_server::ActiveModel {
        component_kind: ActiveValue::Set(kind.to_string()),
        component_id: ActiveValue::Set(component_id),
        server_id: ActiveValue::Set(server_id),
    })
    .exec_with_returning(db)
    .await
}
