//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a component of the given kind together with its brand and an image.
///
/// # Arguments
/// - `db` - Database connection
/// - `kind` - Component kind name, e.g. `"ram"`
///
/// # Returns
/// - `Ok((brand, image, component))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_component_with_dependencies(
    db: &DatabaseConnection,
    kind: &str,
) -> Result<
    (
        entity::brand::Model,
        entity::image::Model,
        entity::component::Model,
    ),
    DbErr,
> {
    let brand = crate::factory::brand::create_brand(db).await?;
    let image = crate::factory::image::create_image(db).await?;
    let component = crate::factory::component::ComponentFactory::new(db, kind, brand.id)
        .image_id(Some(image.id))
        .build()
        .await?;

    Ok((brand, image, component))
}
