//! Server domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::server::{CreateServerDto, ServerComponentDto, ServerDto, UpdateServerDto},
    server::model::kind::ComponentKind,
};

/// A physical server components can be attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: i32,
    pub name: String,
}

impl Server {
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// A component attached to a server, addressed by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerComponent {
    pub kind: ComponentKind,
    pub id: i32,
}

impl ServerComponent {
    /// Converts an association edge to the component it points at.
    ///
    /// # Returns
    /// - `Ok(ServerComponent)` - Edge references a registered kind
    /// - `Err(DbErr::Type)` - Stored kind name is not a registered kind
    pub fn from_edge(entity: entity::component_server::Model) -> Result<Self, DbErr> {
        let kind = entity
            .component_kind
            .parse::<ComponentKind>()
            .map_err(|e| DbErr::Type(e.to_string()))?;

        Ok(Self {
            kind,
            id: entity.component_id,
        })
    }

    pub fn into_dto(self) -> ServerComponentDto {
        ServerComponentDto {
            kind: self.kind.to_string(),
            id: self.id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServerParam {
    pub name: String,
}

impl CreateServerParam {
    pub fn from_dto(dto: CreateServerDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateServerParam {
    pub id: i32,
    pub name: String,
}

impl UpdateServerParam {
    pub fn from_dto(id: i32, dto: UpdateServerDto) -> Self {
        Self { id, name: dto.name }
    }
}
