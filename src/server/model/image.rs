use crate::model::component::ImageDto;

/// An image record owned by exactly one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: i32,
    pub url: String,
}

impl Image {
    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
        }
    }

    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            url: self.url,
        }
    }
}
