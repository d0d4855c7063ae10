//! Association engine.
//!
//! Maintains the component to server edges and resolves the brand, image and servers
//! of components for hydration. Every edge mutation for a `(kind, id)` runs under that
//! component's lock from `ComponentLocks`, so detaching all edges before a delete can
//! never interleave with an attach of the same component.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use tokio::sync::OwnedMutexGuard;

use crate::server::{
    data::{
        association::AssociationRepository, brand::BrandRepository,
        component::ComponentRepository, image::ImageRepository, is_foreign_key_violation,
        server::ServerRepository,
    },
    error::AppError,
    model::{
        brand::Brand,
        component::{Component, HydratedComponent},
        image::Image,
        kind::ComponentKind,
        server::Server,
    },
    service::lock::ComponentLocks,
};

pub struct AssociationService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ComponentLocks,
}

impl<'a> AssociationService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a ComponentLocks) -> Self {
        Self { db, locks }
    }

    /// Attaches a server to a component.
    ///
    /// Attaching an edge that already exists is a no-op. Both records are checked
    /// while the component's lock is held, so an attach racing a delete of the same
    /// component either lands before the delete detaches its edges or fails. The server
    /// is not locked; one deleted after the check is caught by the edge's foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - Edge present after the call
    /// - `Err(AppError::CatalogErr(NotFound))` - Component or server does not exist
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn attach_server(
        &self,
        kind: ComponentKind,
        component_id: i32,
        server_id: i32,
    ) -> Result<(), AppError> {
        let _guard = self.locks.acquire(kind, component_id).await;

        if !ComponentRepository::new(self.db)
            .exists(kind, component_id)
            .await?
        {
            return Err(AppError::not_found(kind.label(), component_id));
        }

        if ServerRepository::new(self.db)
            .find_by_id(server_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Server", server_id));
        }

        let inserted = AssociationRepository::new(self.db)
            .insert_if_absent(kind, component_id, server_id)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    AppError::not_found("Server", server_id)
                } else {
                    AppError::from(err)
                }
            })?;

        if inserted {
            tracing::debug!("Attached server {} to {} {}", server_id, kind, component_id);
        }

        Ok(())
    }

    /// Detaches a server from a component.
    ///
    /// Detaching an edge that does not exist is a no-op.
    pub async fn detach_server(
        &self,
        kind: ComponentKind,
        component_id: i32,
        server_id: i32,
    ) -> Result<(), AppError> {
        let _guard = self.locks.acquire(kind, component_id).await;

        let removed = AssociationRepository::new(self.db)
            .delete(kind, component_id, server_id)
            .await?;

        if removed {
            tracing::debug!(
                "Detached server {} from {} {}",
                server_id,
                kind,
                component_id
            );
        }

        Ok(())
    }

    /// Gets the servers attached to a component ordered by server id.
    ///
    /// A component without edges, including one that does not exist, yields an empty
    /// sequence.
    pub async fn servers_for(
        &self,
        kind: ComponentKind,
        component_id: i32,
    ) -> Result<Vec<Server>, AppError> {
        let servers = AssociationRepository::new(self.db)
            .servers_for(kind, component_id)
            .await?;

        Ok(servers)
    }

    /// Removes every edge of a component and returns how many were removed.
    pub async fn detach_all_for(
        &self,
        kind: ComponentKind,
        component_id: i32,
    ) -> Result<u64, AppError> {
        let guard = self.locks.acquire(kind, component_id).await;

        self.detach_all_locked(&guard, kind, component_id).await
    }

    /// Removes every edge of a component whose lock the caller already holds.
    ///
    /// The guard is only taken to prove a lock is held; the caller keeps it to run
    /// further steps (such as removing the record) before anyone else can attach. The
    /// guard is not tied to its key, so only the services in this module may call it.
    pub(super) async fn detach_all_locked(
        &self,
        _guard: &OwnedMutexGuard<()>,
        kind: ComponentKind,
        component_id: i32,
    ) -> Result<u64, AppError> {
        let removed = AssociationRepository::new(self.db)
            .delete_all_for_component(kind, component_id)
            .await?;

        Ok(removed)
    }

    /// Resolves a component's brand.
    ///
    /// # Returns
    /// - `Ok(Brand)` - The referenced brand
    /// - `Err(AppError::CatalogErr(NotFound))` - The brand id is dangling
    pub async fn resolve_brand(&self, brand_id: i32) -> Result<Brand, AppError> {
        BrandRepository::new(self.db)
            .find_by_id(brand_id)
            .await?
            .ok_or_else(|| AppError::not_found("Brand", brand_id))
    }

    /// Resolves a component's optional image.
    ///
    /// # Returns
    /// - `Ok(Some(Image))` - The referenced image
    /// - `Ok(None)` - The component has no image
    /// - `Err(AppError::CatalogErr(NotFound))` - The image id is dangling
    pub async fn resolve_image(&self, image_id: Option<i32>) -> Result<Option<Image>, AppError> {
        let Some(image_id) = image_id else {
            return Ok(None);
        };

        let image = ImageRepository::new(self.db)
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| AppError::not_found("Image", image_id))?;

        Ok(Some(image))
    }

    /// Joins a component with its brand, image and servers.
    pub async fn hydrate(&self, component: Component) -> Result<HydratedComponent, AppError> {
        let brand = self.resolve_brand(component.brand_id).await?;
        let image = self.resolve_image(component.image_id).await?;
        let servers = self.servers_for(component.kind, component.id).await?;

        Ok(HydratedComponent {
            component,
            brand,
            image,
            servers,
        })
    }

    /// Hydrates components of one kind with a fixed number of queries.
    ///
    /// Brands, images and edges are fetched in one batch each. The first dangling
    /// brand or image fails the whole call rather than returning a partial record.
    pub async fn hydrate_many(
        &self,
        kind: ComponentKind,
        components: Vec<Component>,
    ) -> Result<Vec<HydratedComponent>, AppError> {
        let brand_ids: Vec<i32> = components.iter().map(|c| c.brand_id).collect();
        let image_ids: Vec<i32> = components.iter().filter_map(|c| c.image_id).collect();
        let component_ids: Vec<i32> = components.iter().map(|c| c.id).collect();

        let brands = BrandRepository::new(self.db).find_by_ids(brand_ids).await?;
        let images = ImageRepository::new(self.db).find_by_ids(image_ids).await?;
        let mut servers: HashMap<i32, Vec<Server>> = AssociationRepository::new(self.db)
            .servers_for_many(kind, component_ids)
            .await?;

        components
            .into_iter()
            .map(|component| {
                let brand = brands
                    .get(&component.brand_id)
                    .cloned()
                    .ok_or_else(|| AppError::not_found("Brand", component.brand_id))?;

                let image = match component.image_id {
                    Some(image_id) => Some(
                        images
                            .get(&image_id)
                            .cloned()
                            .ok_or_else(|| AppError::not_found("Image", image_id))?,
                    ),
                    None => None,
                };

                let servers = servers.remove(&component.id).unwrap_or_default();

                Ok(HydratedComponent {
                    component,
                    brand,
                    image,
                    servers,
                })
            })
            .collect()
    }
}
