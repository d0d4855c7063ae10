use crate::server::{
    data::component::ComponentRepository,
    model::{
        attributes::{ComponentAttributes, RamAttributes},
        component::ComponentRecord,
        kind::ComponentKind,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod count_by_brand;
mod find_by_id;
mod get_all_by_kind;

fn ram_record(brand_id: i32, image_id: Option<i32>) -> ComponentRecord {
    ComponentRecord {
        name: "DDR5 32GB".to_string(),
        brand_id,
        image_id,
        price: 129.5,
        attributes: ComponentAttributes::Ram(RamAttributes {
            capacity: 32,
            memory_type: "DDR5".to_string(),
            speed: 4800,
        }),
    }
}
