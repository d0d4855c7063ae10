pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_brand_table;
mod m20260105_000002_create_image_table;
mod m20260105_000003_create_server_table;
mod m20260105_000004_create_component_table;
mod m20260105_000005_create_component_server_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_brand_table::Migration),
            Box::new(m20260105_000002_create_image_table::Migration),
            Box::new(m20260105_000003_create_server_table::Migration),
            Box::new(m20260105_000004_create_component_table::Migration),
            Box::new(m20260105_000005_create_component_server_table::Migration),
        ]
    }
}
