use super::*;

/// Tests listing brands.
///
/// Verifies that brands come back ordered by id regardless of insertion order.
///
/// Expected: Ok with brands sorted by ascending id
#[tokio::test]
async fn returns_brands_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::brand::BrandFactory::new(db).id(5).name("HPE").build().await?;
    factory::brand::BrandFactory::new(db).id(2).name("Dell").build().await?;
    factory::brand::BrandFactory::new(db).id(9).name("Lenovo").build().await?;

    let brands = BrandRepository::new(db).get_all().await?;

    let ids: Vec<i32> = brands.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 5, 9]);

    Ok(())
}

/// Tests listing brands on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_brands() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brands = BrandRepository::new(db).get_all().await?;

    assert!(brands.is_empty());

    Ok(())
}
