use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_brand_table::Brand, m20260105_000002_create_image_table::Image,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Component::Table)
                    .if_not_exists()
                    .col(pk_auto(Component::Id))
                    .col(string(Component::Kind))
                    .col(string(Component::Name))
                    .col(integer(Component::BrandId))
                    .col(integer_null(Component::ImageId))
                    .col(double(Component::Price))
                    .col(json(Component::Attributes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_component_brand_id")
                            .from(Component::Table, Component::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_component_image_id")
                            .from(Component::Table, Component::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // An image belongs to at most one component
        manager
            .create_index(
                Index::create()
                    .name("idx_component_image_id")
                    .table(Component::Table)
                    .col(Component::ImageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_component_kind")
                    .table(Component::Table)
                    .col(Component::Kind)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Component::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Component {
    Table,
    Id,
    Kind,
    Name,
    BrandId,
    ImageId,
    Price,
    Attributes,
}
