use super::*;

/// Tests resolving a component without an image.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let image = AssociationService::new(db, &locks)
        .resolve_image(None)
        .await
        .unwrap();

    assert!(image.is_none());

    Ok(())
}

/// Tests resolving an existing image reference.
///
/// Expected: Ok(Some) with the stored URL
#[tokio::test]
async fn returns_referenced_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let stored =
        factory::image::create_image_with_url(db, "https://cdn.example.com/psu.png").await?;

    let image = AssociationService::new(db, &locks)
        .resolve_image(Some(stored.id))
        .await
        .unwrap();

    assert_eq!(image.unwrap().url, "https://cdn.example.com/psu.png");

    Ok(())
}

/// Tests resolving a dangling image reference.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_dangling_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let result = AssociationService::new(db, &locks)
        .resolve_image(Some(12))
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound {
            entity: "Image",
            id: 12
        }))
    ));

    Ok(())
}
