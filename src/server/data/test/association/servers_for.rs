use super::*;

/// Tests that attached servers come back sorted by id.
///
/// Edges are inserted in descending server order to make sure the result order
/// does not follow insertion order.
///
/// Expected: Ok with servers in ascending id order
#[tokio::test]
async fn orders_servers_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let chassis = factory::create_component(db, "chassis", brand.id).await?;
    for id in [30, 10, 20] {
        factory::server::ServerFactory::new(db).id(id).build().await?;
        factory::create_component_server(db, "chassis", chassis.id, id).await?;
    }

    let servers = AssociationRepository::new(db)
        .servers_for(ComponentKind::Chassis, chassis.id)
        .await?;

    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![10, 20, 30]);

    Ok(())
}

/// Tests that edges stored under another kind with the same id are not returned.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn ignores_edges_of_other_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let server = factory::create_server(db).await?;
    let chassis = factory::create_component(db, "chassis", brand.id).await?;
    factory::create_component_server(db, "chassis", chassis.id, server.id).await?;

    let servers = AssociationRepository::new(db)
        .servers_for(ComponentKind::Ram, chassis.id)
        .await?;

    assert!(servers.is_empty());

    Ok(())
}
