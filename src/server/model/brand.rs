//! Brand domain models and parameters.

use crate::model::brand::{BrandDto, CreateBrandDto, UpdateBrandDto};

/// A component manufacturer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: i32,
    pub name: String,
}

impl Brand {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::brand::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBrandParam {
    pub name: String,
}

impl CreateBrandParam {
    pub fn from_dto(dto: CreateBrandDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBrandParam {
    pub id: i32,
    pub name: String,
}

impl UpdateBrandParam {
    pub fn from_dto(id: i32, dto: UpdateBrandDto) -> Self {
        Self { id, name: dto.name }
    }
}
