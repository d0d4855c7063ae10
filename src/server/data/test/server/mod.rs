use crate::server::{
    data::{is_foreign_key_violation, server::ServerRepository},
    model::server::{CreateServerParam, UpdateServerParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
