//! Component domain models and parameters.
//!
//! A `Component` is the uniform record shared by every kind, with its kind-specific
//! fields held in `ComponentAttributes`. `HydratedComponent` joins the brand, the
//! optional image and the attached servers and is the shape handed to callers.

use sea_orm::DbErr;
use serde_json::Value;

use crate::{
    model::component::{ComponentDto, CreateComponentDto, UpdateComponentDto},
    server::model::{
        attributes::ComponentAttributes, brand::Brand, image::Image, kind::ComponentKind,
        server::Server,
    },
};

/// A stored component of any kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: i32,
    pub kind: ComponentKind,
    pub name: String,
    pub brand_id: i32,
    pub image_id: Option<i32>,
    pub price: f64,
    pub attributes: ComponentAttributes,
}

impl Component {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The component entity from the database
    ///
    /// # Returns
    /// - `Ok(Component)` - Successfully converted domain model
    /// - `Err(DbErr::Type)` - Stored kind is not a registered kind
    /// - `Err(DbErr::Json)` - Stored attributes do not match the kind
    pub fn from_entity(entity: entity::component::Model) -> Result<Self, DbErr> {
        let kind = entity
            .kind
            .parse::<ComponentKind>()
            .map_err(|e| DbErr::Type(e.to_string()))?;

        let attributes = ComponentAttributes::decode(kind, entity.attributes).map_err(|e| {
            DbErr::Json(format!(
                "Invalid attributes for {} {}: {}",
                kind, entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            kind,
            name: entity.name,
            brand_id: entity.brand_id,
            image_id: entity.image_id,
            price: entity.price,
            attributes,
        })
    }
}

/// A component with its brand, image and servers resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct HydratedComponent {
    pub component: Component,
    pub brand: Brand,
    /// `None` when the component has no image.
    pub image: Option<Image>,
    /// Ordered by ascending server id.
    pub servers: Vec<Server>,
}

impl HydratedComponent {
    pub fn into_dto(self) -> Result<ComponentDto, serde_json::Error> {
        Ok(ComponentDto {
            id: self.component.id,
            kind: self.component.kind.to_string(),
            name: self.component.name,
            price: self.component.price,
            attributes: self.component.attributes.to_json()?,
            brand: self.brand.into_dto(),
            image: self.image.map(Image::into_dto),
            servers: self.servers.into_iter().map(Server::into_dto).collect(),
        })
    }
}

/// Column values written when inserting or updating a component row.
///
/// The kind is taken from the attributes so the two can never disagree.
#[derive(Debug, Clone)]
pub struct ComponentRecord {
    pub name: String,
    pub brand_id: i32,
    pub image_id: Option<i32>,
    pub price: f64,
    pub attributes: ComponentAttributes,
}

/// How an update treats the component's current image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageChange {
    Keep,
    Replace(String),
    Remove,
}

impl ImageChange {
    /// A new URL wins over a removal request.
    pub fn from_request(image_url: Option<String>, remove_image: bool) -> Self {
        match (image_url, remove_image) {
            (Some(url), _) => ImageChange::Replace(url),
            (None, true) => ImageChange::Remove,
            (None, false) => ImageChange::Keep,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateComponentParam {
    pub kind: ComponentKind,
    pub name: String,
    pub brand_id: i32,
    pub price: f64,
    pub image_url: Option<String>,
    /// Unvalidated kind-specific payload.
    pub attributes: Value,
    pub server_ids: Vec<i32>,
}

impl CreateComponentParam {
    pub fn from_dto(kind: ComponentKind, dto: CreateComponentDto) -> Self {
        Self {
            kind,
            name: dto.name,
            brand_id: dto.brand_id,
            price: dto.price,
            image_url: dto.image_url,
            attributes: dto.attributes,
            server_ids: dto.server_ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateComponentParam {
    pub kind: ComponentKind,
    pub id: i32,
    pub name: String,
    pub brand_id: i32,
    pub price: f64,
    pub image: ImageChange,
    /// Unvalidated kind-specific payload.
    pub attributes: Value,
}

impl UpdateComponentParam {
    pub fn from_dto(kind: ComponentKind, id: i32, dto: UpdateComponentDto) -> Self {
        Self {
            kind,
            id,
            name: dto.name,
            brand_id: dto.brand_id,
            price: dto.price,
            image: ImageChange::from_request(dto.image_url, dto.remove_image),
            attributes: dto.attributes,
        }
    }
}
