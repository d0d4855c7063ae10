use crate::server::{
    data::{association::AssociationRepository, is_foreign_key_violation},
    model::{kind::ComponentKind, server::ServerComponent},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod components_for_server;
mod delete_all_for_component;
mod servers_for;
mod servers_for_many;
