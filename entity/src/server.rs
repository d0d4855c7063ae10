use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::component_server::Entity")]
    ComponentServer,
}

impl Related<super::component_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComponentServer.def()
    }
}

impl Related<super::component::Entity> for Entity {
    fn to() -> RelationDef {
        super::component_server::Relation::Component.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::component_server::Relation::Server.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
