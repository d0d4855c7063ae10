use super::*;

/// Tests the hydrated shape of a fetched component.
///
/// Brand `{1, "Dell"}`, server `{7, "srv-a"}` and chassis `{3, "ChassisX"}` with the
/// server attached.
///
/// Expected: Ok with brand Dell and servers `[srv-a]`
#[tokio::test]
async fn hydrates_brand_and_servers() -> Result<(), DbErr> {
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
    factory::server::ServerFactory::new(db)
        .id(7)
        .name("srv-a")
        .build()
        .await?;
    factory::component::ComponentFactory::new(db, "chassis", 1)
        .id(3)
        .name("ChassisX")
        .build()
        .await?;

    crate::server::service::association::AssociationService::new(db, &locks)
        .attach_server(ComponentKind::Chassis, 3, 7)
        .await
        .unwrap();

    let component = CatalogService::new(db, &locks)
        .get(ComponentKind::Chassis, 3)
        .await
        .unwrap();

    assert_eq!(component.component.name, "ChassisX");
    assert_eq!(component.brand.id, 1);
    assert_eq!(component.brand.name, "Dell");
    assert!(component.image.is_none());
    assert_eq!(component.servers.len(), 1);
    assert_eq!(component.servers[0].id, 7);
    assert_eq!(component.servers[0].name, "srv-a");

    Ok(())
}

/// Tests that each kind resolves its brand.
///
/// Expected: Ok with `brand.id == brand_id` for every kind
#[tokio::test]
async fn resolves_brand_for_every_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let service = CatalogService::new(db, &locks);
    for kind in ComponentKind::ALL {
        let (brand, image, component) =
            factory::helpers::create_component_with_dependencies(db, kind.as_str()).await?;

        let hydrated = service.get(kind, component.id).await.unwrap();

        assert_eq!(hydrated.brand.id, brand.id);
        assert_eq!(hydrated.image.unwrap().id, image.id);
        assert_eq!(hydrated.component.kind, kind);
    }

    Ok(())
}

/// Tests getting a component that does not exist.
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
        .get(ComponentKind::Ram, 1)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound { id: 1, .. }))
    ));

    Ok(())
}
