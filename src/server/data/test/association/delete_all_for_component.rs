use super::*;

/// Tests removing every edge of a component.
///
/// Verifies that edges of another component sharing the same server survive.
///
/// Expected: Ok(2) with only the other component's edge left
#[tokio::test]
async fn removes_only_that_components_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    let ram = factory::create_component(db, "ram", brand.id).await?;
    let other = factory::create_component(db, "ram", brand.id).await?;
    factory::create_component_server(db, "ram", ram.id, first.id).await?;
    factory::create_component_server(db, "ram", ram.id, second.id).await?;
    factory::create_component_server(db, "ram", other.id, first.id).await?;

    let removed = AssociationRepository::new(db)
        .delete_all_for_component(ComponentKind::Ram, ram.id)
        .await?;

    assert_eq!(removed, 2);

    let remaining = entity::prelude::ComponentServer::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].component_id, other.id);

    Ok(())
}
