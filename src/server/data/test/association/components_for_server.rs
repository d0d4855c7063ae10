use super::*;

/// Tests listing the components attached to a server.
///
/// Expected: Ok with components ordered by kind name, then id
#[tokio::test]
async fn lists_components_by_kind_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let server = factory::create_server(db).await?;
    let ram = factory::create_component(db, "ram", brand.id).await?;
    let chassis = factory::create_component(db, "chassis", brand.id).await?;
    factory::create_component_server(db, "ram", ram.id, server.id).await?;
    factory::create_component_server(db, "chassis", chassis.id, server.id).await?;

    let repo = AssociationRepository::new(db);
    let components = repo.components_for_server(server.id).await?;

    assert_eq!(
        components,
        vec![
            ServerComponent {
                kind: ComponentKind::Chassis,
                id: chassis.id,
            },
            ServerComponent {
                kind: ComponentKind::Ram,
                id: ram.id,
            },
        ]
    );
    assert_eq!(repo.count_for_server(server.id).await?, 2);

    Ok(())
}
