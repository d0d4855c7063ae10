use sea_orm::entity::prelude::*;

/// Association edge between a component and a server.
///
/// The composite primary key rules out duplicate edges.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "component_server")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub component_kind: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub component_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub server_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::component::Entity",
        from = "Column::ComponentId",
        to = "super::component::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Component,
    #[sea_orm(
        belongs_to = "super::server::Entity",
        from = "Column::ServerId",
        to = "super::server::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Server,
}

impl Related<super::component::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Component.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
