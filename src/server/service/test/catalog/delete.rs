use super::*;
use crate::server::service::{association::AssociationService, brand::BrandService};

/// Tests the state after deleting an attached component.
///
/// Expected: Ok, then no servers for the component and get fails with NotFound
#[tokio::test]
async fn detaches_servers_and_removes_component() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let brand = factory::create_brand(db).await?;
    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    let nic = factory::create_component(db, "network_card", brand.id).await?;
    factory::create_component_server(db, "network_card", nic.id, first.id).await?;
    factory::create_component_server(db, "network_card", nic.id, second.id).await?;

    let service = CatalogService::new(db, &locks);
    service
        .delete(&Identity::Anonymous, ComponentKind::NetworkCard, nic.id)
        .await
        .unwrap();

    let servers = AssociationService::new(db, &locks)
        .servers_for(ComponentKind::NetworkCard, nic.id)
        .await
        .unwrap();
    assert!(servers.is_empty());
    assert_eq!(entity::prelude::ComponentServer::find().count(db).await?, 0);

    let result = service.get(ComponentKind::NetworkCard, nic.id).await;
    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound { .. }))
    ));

    Ok(())
}

/// Tests that the component's image is removed with it.
///
/// Expected: Ok with the image record gone
#[tokio::test]
async fn removes_owned_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let (_, image, psu) =
        factory::helpers::create_component_with_dependencies(db, "power_supply").await?;

    CatalogService::new(db, &locks)
        .delete(&Identity::Anonymous, ComponentKind::PowerSupply, psu.id)
        .await
        .unwrap();

    assert!(entity::prelude::Image::find_by_id(image.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a component that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_component() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let result = CatalogService::new(db, &locks)
        .delete(&Identity::Anonymous, ComponentKind::Chassis, 3)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound { .. }))
    ));

    Ok(())
}

/// Tests that a brand becomes deletable once its last component is deleted.
///
/// Expected: Err(Conflict) while chassis 3 references brand 1, Ok afterwards
#[tokio::test]
async fn releases_brand_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    factory::brand::BrandFactory::new(db)
        .id(1)
        .name("Dell")
        .build()
        .await?;
    factory::component::ComponentFactory::new(db, "chassis", 1)
        .id(3)
        .name("ChassisX")
        .build()
        .await?;

    let brands = BrandService::new(db);
    let result = brands.delete(&Identity::Anonymous, 1).await;
    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::Conflict(_)))
    ));

    CatalogService::new(db, &locks)
        .delete(&Identity::Anonymous, ComponentKind::Chassis, 3)
        .await
        .unwrap();

    brands.delete(&Identity::Anonymous, 1).await.unwrap();

    Ok(())
}

/// Tests racing attaches against a delete of the same component.
///
/// Every attach either lands before the delete detaches the edges or fails with
/// NotFound afterwards.
///
/// Expected: no edge survives the component
#[tokio::test]
async fn leaves_no_edge_behind_concurrent_attach() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();
    let locks = ComponentLocks::new();

    let brand = factory::create_brand(&db).await?;
    let mut server_ids = Vec::new();
    for _ in 0..5 {
        server_ids.push(factory::create_server(&db).await?.id);
    }
    let gpu_id = factory::create_component(&db, "graphic_card", brand.id)
        .await?
        .id;

    let mut handles = Vec::new();
    for server_id in server_ids {
        let db = db.clone();
        let locks = locks.clone();
        handles.push(tokio::spawn(async move {
            let _ = AssociationService::new(&db, &locks)
                .attach_server(ComponentKind::GraphicCard, gpu_id, server_id)
                .await;
        }));
    }

    CatalogService::new(&db, &locks)
        .delete(&Identity::Anonymous, ComponentKind::GraphicCard, gpu_id)
        .await
        .unwrap();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(entity::prelude::ComponentServer::find().count(&db).await?, 0);

    Ok(())
}

/// Tests deleting a component whose image cannot be removed.
///
/// A trigger blocks every image delete. The failure is only logged.
///
/// Expected: Ok with the component gone and its image left behind
#[tokio::test]
async fn keeps_delete_when_image_cleanup_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let (_, image, chassis) =
        factory::helpers::create_component_with_dependencies(db, "chassis").await?;
    db.execute_unprepared(
        "CREATE TRIGGER block_image_delete BEFORE DELETE ON image \
         BEGIN SELECT RAISE(ABORT, 'image is locked'); END",
    )
    .await?;

    let service = CatalogService::new(db, &locks);
    service
        .delete(&Identity::Anonymous, ComponentKind::Chassis, chassis.id)
        .await
        .unwrap();

    assert!(entity::prelude::Image::find_by_id(image.id)
        .one(db)
        .await?
        .is_some());
    assert!(matches!(
        service.get(ComponentKind::Chassis, chassis.id).await,
        Err(AppError::CatalogErr(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
