use super::*;

/// Tests batch lookup of attached servers.
///
/// Expected: Ok with an ordered list per component with edges and no entry for the
/// component without edges
#[tokio::test]
async fn groups_servers_by_component() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::create_brand(db).await?;
    let low = factory::server::ServerFactory::new(db).id(2).build().await?;
    let high = factory::server::ServerFactory::new(db).id(8).build().await?;
    let first = factory::create_component(db, "power_supply", brand.id).await?;
    let second = factory::create_component(db, "power_supply", brand.id).await?;
    let bare = factory::create_component(db, "power_supply", brand.id).await?;
    factory::create_component_server(db, "power_supply", first.id, high.id).await?;
    factory::create_component_server(db, "power_supply", first.id, low.id).await?;
    factory::create_component_server(db, "power_supply", second.id, high.id).await?;

    let servers = AssociationRepository::new(db)
        .servers_for_many(
            ComponentKind::PowerSupply,
            vec![first.id, second.id, bare.id],
        )
        .await?;

    let first_ids: Vec<i32> = servers[&first.id].iter().map(|s| s.id).collect();
    assert_eq!(first_ids, vec![2, 8]);
    assert_eq!(servers[&second.id].len(), 1);
    assert!(!servers.contains_key(&bare.id));

    Ok(())
}
