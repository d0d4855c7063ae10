use super::*;

/// Tests finding a component by kind and id.
///
/// Expected: Ok(Some) with decoded attributes
#[tokio::test]
async fn finds_component_of_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let psu = factory::create_component(db, "power_supply", brand.id).await?;

    let found = ComponentRepository::new(db)
        .find_by_id(ComponentKind::PowerSupply, psu.id)
        .await?;

    let found = found.unwrap();
    assert_eq!(found.name, psu.name);
    assert!(matches!(
        found.attributes,
        ComponentAttributes::PowerSupply(ref attrs) if attrs.modular
    ));

    Ok(())
}

/// Tests that the id of one kind is not found under another kind.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let chassis = factory::create_component(db, "chassis", brand.id).await?;

    let repo = ComponentRepository::new(db);

    assert!(repo.find_by_id(ComponentKind::Ram, chassis.id).await?.is_none());
    assert!(!repo.exists(ComponentKind::Ram, chassis.id).await?);
    assert!(repo.exists(ComponentKind::Chassis, chassis.id).await?);

    Ok(())
}
