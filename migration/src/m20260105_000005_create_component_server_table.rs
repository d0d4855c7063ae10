use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_server_table::Server,
    m20260105_000004_create_component_table::Component,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComponentServer::Table)
                    .if_not_exists()
                    .col(string(ComponentServer::ComponentKind))
                    .col(integer(ComponentServer::ComponentId))
                    .col(integer(ComponentServer::ServerId))
                    .primary_key(
                        Index::create()
                            .col(ComponentServer::ComponentKind)
                            .col(ComponentServer::ComponentId)
                            .col(ComponentServer::ServerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_component_server_component_id")
                            .from(ComponentServer::Table, ComponentServer::ComponentId)
                            .to(Component::Table, Component::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_component_server_server_id")
                            .from(ComponentServer::Table, ComponentServer::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ComponentServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ComponentServer {
    Table,
    ComponentKind,
    ComponentId,
    ServerId,
}
