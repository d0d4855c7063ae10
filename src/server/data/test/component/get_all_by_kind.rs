use super::*;

/// Tests listing components of one kind.
///
/// Verifies that only the requested kind is returned, ordered by id.
///
/// Expected: Ok with the two network cards in id order
#[tokio::test]
async fn returns_only_requested_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    factory::component::ComponentFactory::new(db, "network_card", brand.id)
        .id(20)
        .build()
        .await?;
    factory::component::ComponentFactory::new(db, "ram", brand.id)
        .id(15)
        .build()
        .await?;
    factory::component::ComponentFactory::new(db, "network_card", brand.id)
        .id(11)
        .build()
        .await?;

    let components = ComponentRepository::new(db)
        .get_all_by_kind(ComponentKind::NetworkCard)
        .await?;

    let ids: Vec<i32> = components.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![11, 20]);
    assert!(components
        .iter()
        .all(|c| c.kind == ComponentKind::NetworkCard));

    Ok(())
}
