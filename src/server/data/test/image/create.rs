use super::*;

/// Tests creating an image record.
///
/// Expected: Ok with URL stored unchanged
#[tokio::test]
async fn creates_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageRepository::new(db);
    let image = repo
        .create("https://cdn.example.com/r740.png".to_string())
        .await?;

    let found = repo.find_by_id(image.id).await?;
    assert_eq!(found.unwrap().url, "https://cdn.example.com/r740.png");

    Ok(())
}
