use super::*;

/// Tests that attaching the same server twice leaves one edge.
///
/// Expected: Ok both times with a single stored edge
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let brand = factory::create_brand(db).await?;
    let server = factory::create_server(db).await?;
    let ram = factory::create_component(db, "ram", brand.id).await?;

    let service = AssociationService::new(db, &locks);
    service
        .attach_server(ComponentKind::Ram, ram.id, server.id)
        .await
        .unwrap();
    service
        .attach_server(ComponentKind::Ram, ram.id, server.id)
        .await
        .unwrap();

    assert_eq!(entity::prelude::ComponentServer::find().count(db).await?, 1);
    assert_eq!(
        service.servers_for(ComponentKind::Ram, ram.id).await.unwrap().len(),
        1
    );

    Ok(())
}

/// Tests attaching to a component that does not exist under the given kind.
///
/// Expected: Err(NotFound) and no edge stored
#[tokio::test]
async fn fails_for_missing_component() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let brand = factory::create_brand(db).await?;
    let server = factory::create_server(db).await?;
    let chassis = factory::create_component(db, "chassis", brand.id).await?;

    let result = AssociationService::new(db, &locks)
        .attach_server(ComponentKind::Ram, chassis.id, server.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound { .. }))
    ));
    assert_eq!(entity::prelude::ComponentServer::find().count(db).await?, 0);

    Ok(())
}

/// Tests attaching a server that does not exist.
///
/// Expected: Err(NotFound) naming the server
#[tokio::test]
async fn fails_for_missing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let brand = factory::create_brand(db).await?;
    let chassis = factory::create_component(db, "chassis", brand.id).await?;

    let result = AssociationService::new(db, &locks)
        .attach_server(ComponentKind::Chassis, chassis.id, 99)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound {
            entity: "Server",
            id: 99
        }))
    ));

    Ok(())
}
