//! Brand registry.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{brand::BrandRepository, component::ComponentRepository, is_foreign_key_violation},
    error::{catalog::CatalogError, AppError},
    model::{
        brand::{Brand, CreateBrandParam, UpdateBrandParam},
        identity::Identity,
    },
};

pub struct BrandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        identity: &Identity,
        param: CreateBrandParam,
    ) -> Result<Brand, AppError> {
        validate_name(&param.name)?;

        let brand = BrandRepository::new(self.db).create(param).await?;

        tracing::info!("{} created brand {} ({})", identity, brand.id, brand.name);

        Ok(brand)
    }

    /// Gets a brand by id, failing with NotFound when it does not exist.
    pub async fn get(&self, id: i32) -> Result<Brand, AppError> {
        BrandRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Brand", id))
    }

    /// Gets all brands ordered by id.
    pub async fn list(&self) -> Result<Vec<Brand>, AppError> {
        Ok(BrandRepository::new(self.db).get_all().await?)
    }

    /// Renames a brand.
    ///
    /// A brand is immutable once any component references it.
    ///
    /// # Returns
    /// - `Ok(Brand)` - The renamed brand
    /// - `Err(AppError::CatalogErr(NotFound))` - No brand with that id
    /// - `Err(AppError::CatalogErr(Conflict))` - A component references the brand
    /// - `Err(AppError::CatalogErr(InvalidPayload))` - Empty name
    pub async fn update(
        &self,
        identity: &Identity,
        param: UpdateBrandParam,
    ) -> Result<Brand, AppError> {
        validate_name(&param.name)?;

        let id = param.id;
        self.get(id).await?;
        self.ensure_unreferenced(id).await?;

        let brand = BrandRepository::new(self.db).update(param).await?;

        tracing::info!("{} renamed brand {} to {}", identity, brand.id, brand.name);

        Ok(brand)
    }

    /// Deletes a brand no component references.
    ///
    /// The registry never cascades; callers must delete or re-brand the referencing
    /// components first. A component created between the reference count and the
    /// delete is caught by the foreign key and reported as a conflict too.
    ///
    /// # Returns
    /// - `Ok(())` - The brand was deleted
    /// - `Err(AppError::CatalogErr(NotFound))` - No brand with that id
    /// - `Err(AppError::CatalogErr(Conflict))` - A component references the brand
    pub async fn delete(&self, identity: &Identity, id: i32) -> Result<(), AppError> {
        self.get(id).await?;
        self.ensure_unreferenced(id).await?;

        BrandRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    CatalogError::Conflict(format!("Brand {} is referenced by a component", id))
                        .into()
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::info!("{} deleted brand {}", identity, id);

        Ok(())
    }

    async fn ensure_unreferenced(&self, id: i32) -> Result<(), AppError> {
        let references = ComponentRepository::new(self.db).count_by_brand(id).await?;

        if references > 0 {
            return Err(CatalogError::Conflict(format!(
                "Brand {} is referenced by {} component(s)",
                id, references
            ))
            .into());
        }

        Ok(())
    }
}

/// Rejects blank brand and server names.
pub(super) fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidPayload(
            "Name must not be empty".to_string(),
        ));
    }

    Ok(())
}
