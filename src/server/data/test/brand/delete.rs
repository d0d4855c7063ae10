use super::*;

/// Tests deleting an unreferenced brand.
///
/// Expected: Ok with brand removed
#[tokio::test]
async fn deletes_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;

    BrandRepository::new(db).delete(brand.id).await?;

    let stored = entity::prelude::Brand::find_by_id(brand.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that the database refuses to delete a referenced brand.
///
/// The foreign key on `component.brand_id` restricts deletes, so the repository call
/// fails even when the service-level check is bypassed.
///
/// Expected: Err recognized as a foreign key violation
#[tokio::test]
async fn fails_while_component_references_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    factory::create_component(db, "chassis", brand.id).await?;

    let result = BrandRepository::new(db).delete(brand.id).await;

    let err = result.unwrap_err();
    assert!(is_foreign_key_violation(&err));

    Ok(())
}
