use super::*;

/// Tests creating a brand through the registry.
///
/// Expected: Ok with the brand listed afterwards
#[tokio::test]
async fn creates_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BrandService::new(db);
    let brand = service
        .create(
            &Identity::Anonymous,
            CreateBrandParam {
                name: "Dell".to_string(),
            },
        )
        .await
        .unwrap();

    let brands = service.list().await.unwrap();
    assert_eq!(brands, vec![brand]);

    Ok(())
}

/// Tests creating a brand with a blank name.
///
/// Expected: Err(InvalidPayload)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BrandService::new(db)
        .create(
            &Identity::Anonymous,
            CreateBrandParam {
                name: "   ".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::InvalidPayload(_)))
    ));

    Ok(())
}
