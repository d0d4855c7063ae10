//! Catalog service.
//!
//! The façade callers use to list, fetch, create, update and delete fully-hydrated
//! components of any kind. Kind-specific behavior is limited to the schema lookup;
//! everything else is shared by all eight kinds.
//!
//! Image cleanup after a delete or an image change is best-effort: the component
//! change has already happened, so a failed image removal is logged and the image
//! record is left orphaned.

use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::{
        component::ComponentRepository, image::ImageRepository, is_foreign_key_violation,
        server::ServerRepository,
    },
    error::{catalog::CatalogError, AppError},
    model::{
        attributes::ComponentAttributes,
        component::{
            ComponentRecord, CreateComponentParam, HydratedComponent, ImageChange,
            UpdateComponentParam,
        },
        identity::Identity,
        kind::ComponentKind,
        schema::schema_of,
    },
    service::{association::AssociationService, lock::ComponentLocks},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ComponentLocks,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a ComponentLocks) -> Self {
        Self { db, locks }
    }

    fn associations(&self) -> AssociationService<'a> {
        AssociationService::new(self.db, self.locks)
    }

    /// Lists every component of a kind, hydrated, ordered by component id.
    pub async fn list(&self, kind: ComponentKind) -> Result<Vec<HydratedComponent>, AppError> {
        let components = ComponentRepository::new(self.db)
            .get_all_by_kind(kind)
            .await?;

        tracing::debug!("Listing {} {} component(s)", components.len(), kind);

        self.associations().hydrate_many(kind, components).await
    }

    /// Gets one hydrated component.
    ///
    /// # Returns
    /// - `Ok(HydratedComponent)` - Component with brand, image and servers
    /// - `Err(AppError::CatalogErr(NotFound))` - No component of that kind with that id,
    ///   or its brand or image reference is dangling
    pub async fn get(&self, kind: ComponentKind, id: i32) -> Result<HydratedComponent, AppError> {
        let component = ComponentRepository::new(self.db)
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| AppError::not_found(kind.label(), id))?;

        self.associations().hydrate(component).await
    }

    /// Creates a component and attaches the requested servers.
    ///
    /// The brand and every server are resolved before anything is written. When an
    /// image URL is given a new image record is created for the component.
    ///
    /// # Returns
    /// - `Ok(HydratedComponent)` - The created component
    /// - `Err(AppError::CatalogErr(InvalidPayload))` - Name, price or attributes invalid
    /// - `Err(AppError::CatalogErr(NotFound))` - Brand or a server does not exist
    pub async fn create(
        &self,
        identity: &Identity,
        param: CreateComponentParam,
    ) -> Result<HydratedComponent, AppError> {
        let kind = param.kind;
        validate_common(&param.name, param.price)?;
        let attributes = decode_attributes(kind, param.attributes)?;

        let associations = self.associations();
        associations.resolve_brand(param.brand_id).await?;

        let server_ids: BTreeSet<i32> = param.server_ids.into_iter().collect();
        let server_repo = ServerRepository::new(self.db);
        for &server_id in &server_ids {
            if server_repo.find_by_id(server_id).await?.is_none() {
                return Err(AppError::not_found("Server", server_id));
            }
        }

        let image = match param.image_url {
            Some(url) => Some(ImageRepository::new(self.db).create(url).await?),
            None => None,
        };
        let image_id = image.as_ref().map(|i| i.id);

        let created = ComponentRepository::new(self.db)
            .create(ComponentRecord {
                name: param.name,
                brand_id: param.brand_id,
                image_id,
                price: param.price,
                attributes,
            })
            .await;

        let component = match created {
            Ok(component) => component,
            Err(err) => {
                if let Some(image_id) = image_id {
                    self.remove_orphan_image(image_id).await;
                }
                return Err(brand_violation(err, param.brand_id));
            }
        };

        for server_id in server_ids {
            associations
                .attach_server(kind, component.id, server_id)
                .await?;
        }

        tracing::info!(
            "{} created {} {} ({})",
            identity,
            kind,
            component.id,
            component.name
        );

        self.get(kind, component.id).await
    }

    /// Replaces a component's fields and optionally its image.
    ///
    /// Runs under the component's lock. Attached servers are left untouched. A
    /// replaced or removed image is deleted best-effort once the component no longer
    /// references it.
    ///
    /// # Returns
    /// - `Ok(HydratedComponent)` - The updated component
    /// - `Err(AppError::CatalogErr(NotFound))` - Component or new brand does not exist
    /// - `Err(AppError::CatalogErr(InvalidPayload))` - Name, price or attributes invalid
    pub async fn update(
        &self,
        identity: &Identity,
        param: UpdateComponentParam,
    ) -> Result<HydratedComponent, AppError> {
        let kind = param.kind;
        let id = param.id;
        validate_common(&param.name, param.price)?;
        let attributes = decode_attributes(kind, param.attributes)?;

        let guard = self.locks.acquire(kind, id).await;

        let repo = ComponentRepository::new(self.db);
        let existing = repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| AppError::not_found(kind.label(), id))?;

        self.associations().resolve_brand(param.brand_id).await?;

        let image_id = match param.image {
            ImageChange::Keep => existing.image_id,
            ImageChange::Replace(url) => Some(ImageRepository::new(self.db).create(url).await?.id),
            ImageChange::Remove => None,
        };

        let updated = repo
            .update(
                id,
                ComponentRecord {
                    name: param.name,
                    brand_id: param.brand_id,
                    image_id,
                    price: param.price,
                    attributes,
                },
            )
            .await;

        if let Err(err) = updated {
            if image_id != existing.image_id {
                if let Some(new_image_id) = image_id {
                    self.remove_orphan_image(new_image_id).await;
                }
            }
            return Err(brand_violation(err, param.brand_id));
        }

        drop(guard);

        if let Some(old_image_id) = existing.image_id.filter(|old| Some(*old) != image_id) {
            self.remove_orphan_image(old_image_id).await;
        }

        tracing::info!("{} updated {} {}", identity, kind, id);

        self.get(kind, id).await
    }

    /// Deletes a component.
    ///
    /// Under the component's lock its edges are detached first and only then is the
    /// record removed, so no edge can outlive the component. The image, if any, is
    /// removed best-effort afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - The component is gone
    /// - `Err(AppError::CatalogErr(NotFound))` - No component of that kind with that id
    /// - `Err(AppError::DbErr(_))` - Edge detachment or record removal failed
    pub async fn delete(
        &self,
        identity: &Identity,
        kind: ComponentKind,
        id: i32,
    ) -> Result<(), AppError> {
        let guard = self.locks.acquire(kind, id).await;

        let repo = ComponentRepository::new(self.db);
        let component = repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| AppError::not_found(kind.label(), id))?;

        let detached = self
            .associations()
            .detach_all_locked(&guard, kind, id)
            .await?;

        repo.delete(kind, id).await?;

        drop(guard);

        tracing::info!(
            "{} deleted {} {} (detached {} server(s))",
            identity,
            kind,
            id,
            detached
        );

        if let Some(image_id) = component.image_id {
            self.remove_orphan_image(image_id).await;
        }

        Ok(())
    }

    async fn remove_orphan_image(&self, image_id: i32) {
        if let Err(source) = ImageRepository::new(self.db).delete(image_id).await {
            let err = CatalogError::OrphanCleanupFailure { image_id, source };
            tracing::warn!("{}", err);
        }
    }
}

/// Maps a foreign key failure on a component write to the brand deleted under it.
fn brand_violation(err: sea_orm::DbErr, brand_id: i32) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::not_found("Brand", brand_id)
    } else {
        AppError::from(err)
    }
}

fn validate_common(name: &str, price: f64) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidPayload(
            "Name must not be empty".to_string(),
        ));
    }

    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::InvalidPayload(
            "Price must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}

fn decode_attributes(kind: ComponentKind, value: Value) -> Result<ComponentAttributes, CatalogError> {
    schema_of(kind).validate(&value)?;

    ComponentAttributes::decode(kind, value)
        .map_err(|e| CatalogError::InvalidPayload(format!("Invalid {} attributes: {}", kind, e)))
}
