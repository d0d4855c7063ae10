use super::*;

/// Tests creating a server.
///
/// Expected: Ok with server stored under the returned id
#[tokio::test]
async fn creates_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = ServerRepository::new(db)
        .create(CreateServerParam {
            name: "srv-a".to_string(),
        })
        .await?;

    let stored = entity::prelude::Server::find_by_id(server.id).one(db).await?;
    assert_eq!(stored.unwrap().name, "srv-a");

    Ok(())
}
