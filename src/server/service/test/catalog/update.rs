use super::*;

fn update_param(kind: ComponentKind, id: i32, brand_id: i32) -> UpdateComponentParam {
    UpdateComponentParam {
        kind,
        id,
        name: "Updated".to_string(),
        brand_id,
        price: 10.0,
        image: ImageChange::Keep,
        attributes: fixture::component::attributes(kind.as_str()),
    }
}

/// Tests updating fields while keeping the image and servers.
///
/// Expected: Ok with new fields, same image and same servers
#[tokio::test]
async fn keeps_image_and_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let server = factory::create_server(db).await?;
    let (brand, image, chassis) =
        factory::helpers::create_component_with_dependencies(db, "chassis").await?;
    factory::create_component_server(db, "chassis", chassis.id, server.id).await?;

    let mut param = update_param(ComponentKind::Chassis, chassis.id, brand.id);
    param.attributes = serde_json::json!({
        "type": "Tower",
        "form_factor": "ATX",
        "material": "Aluminium",
    });

    let updated = CatalogService::new(db, &locks)
        .update(&Identity::Anonymous, param)
        .await
        .unwrap();

    assert_eq!(updated.component.name, "Updated");
    assert_eq!(updated.component.price, 10.0);
    assert_eq!(updated.image.unwrap().id, image.id);
    assert_eq!(updated.servers.len(), 1);
    assert_eq!(
        updated.component.attributes.to_json().unwrap()["type"],
        "Tower"
    );

    Ok(())
}

/// Tests replacing the image.
///
/// Expected: Ok with the new URL and the old image record removed
#[tokio::test]
async fn replaces_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let (brand, old_image, ram) =
        factory::helpers::create_component_with_dependencies(db, "ram").await?;

    let mut param = update_param(ComponentKind::Ram, ram.id, brand.id);
    param.image = ImageChange::Replace("https://cdn.example.com/new.png".to_string());

    let updated = CatalogService::new(db, &locks)
        .update(&Identity::Anonymous, param)
        .await
        .unwrap();

    let image = updated.image.unwrap();
    assert_ne!(image.id, old_image.id);
    assert_eq!(image.url, "https://cdn.example.com/new.png");
    assert!(entity::prelude::Image::find_by_id(old_image.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests removing the image.
///
/// Expected: Ok with no image and the image record removed
#[tokio::test]
async fn removes_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let (brand, _, card) =
        factory::helpers::create_component_with_dependencies(db, "fiber_optic_card").await?;

    let mut param = update_param(ComponentKind::FiberOpticCard, card.id, brand.id);
    param.image = ImageChange::Remove;

    let updated = CatalogService::new(db, &locks)
        .update(&Identity::Anonymous, param)
        .await
        .unwrap();

    assert!(updated.image.is_none());
    assert_eq!(entity::prelude::Image::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating a component that does not exist.
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

    let brand = factory::create_brand(db).await?;

    let result = CatalogService::new(db, &locks)
        .update(
            &Identity::Anonymous,
            update_param(ComponentKind::NetworkCard, 5, brand.id),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound { id: 5, .. }))
    ));

    Ok(())
}

/// Tests moving a component to a brand that does not exist.
///
/// Expected: Err(NotFound) on brand and the component unchanged
#[tokio::test]
async fn fails_for_missing_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ComponentLocks::new();

    let brand = factory::create_brand(db).await?;
    let psu = factory::create_component(db, "power_supply", brand.id).await?;

    let service = CatalogService::new(db, &locks);
    let result = service
        .update(
            &Identity::Anonymous,
            update_param(ComponentKind::PowerSupply, psu.id, 404),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::NotFound {
            entity: "Brand",
            ..
        }))
    ));

    let unchanged = service.get(ComponentKind::PowerSupply, psu.id).await.unwrap();
    assert_eq!(unchanged.component.name, psu.name);

    Ok(())
}
