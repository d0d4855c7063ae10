use super::*;

/// Tests counting components across kinds that reference a brand.
///
/// Expected: Ok(2) for the referenced brand, Ok(0) for the other
#[tokio::test]
async fn counts_across_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let unused = factory::create_brand(db).await?;
    factory::create_component(db, "ram", brand.id).await?;
    factory::create_component(db, "raid_controller", brand.id).await?;

    let repo = ComponentRepository::new(db);

    assert_eq!(repo.count_by_brand(brand.id).await?, 2);
    assert_eq!(repo.count_by_brand(unused.id).await?, 0);

    Ok(())
}
