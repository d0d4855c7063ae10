use super::*;

/// Tests renaming a brand.
///
/// Expected: Ok with new name persisted
#[tokio::test]
async fn renames_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;

    let updated = BrandRepository::new(db)
        .update(UpdateBrandParam {
            id: brand.id,
            name: "Dell EMC".to_string(),
        })
        .await?;

    assert_eq!(updated.id, brand.id);
    assert_eq!(updated.name, "Dell EMC");

    Ok(())
}

/// Tests renaming a brand that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BrandRepository::new(db)
        .update(UpdateBrandParam {
            id: 42,
            name: "Ghost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
