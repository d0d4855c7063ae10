use crate::server::{
    data::{brand::BrandRepository, is_foreign_key_violation},
    model::brand::{CreateBrandParam, UpdateBrandParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod update;
