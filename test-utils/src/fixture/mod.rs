//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default
//! values used by the factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let brand = fixture::brand::entity();
//!
//! let ram = fixture::component::entity_builder()
//!     .kind("ram")
//!     .name("DDR5 32GB")
//!     .build();
//! ```

pub mod brand;
pub mod component;
pub mod image;
pub mod server;

pub use brand::entity as brand_entity;
pub use component::{entity as component_entity, entity_builder as component_entity_builder};
pub use image::entity as image_entity;
pub use server::entity as server_entity;
