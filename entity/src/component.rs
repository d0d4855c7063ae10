use sea_orm::entity::prelude::*;

/// A catalog component of any kind.
///
/// `kind` holds the snake_case kind name (`chassis`, `ram`, ...) and
/// `attributes` the kind-specific fields as a JSON object.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "component")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: String,
    pub name: String,
    pub brand_id: i32,
    #[sea_orm(unique)]
    pub image_id: Option<i32>,
    pub price: f64,
    pub attributes: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Image,
    #[sea_orm(has_many = "super::component_server::Entity")]
    ComponentServer,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl Related<super::component_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComponentServer.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        super::component_server::Relation::Server.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::component_server::Relation::Component.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
