//! Service layer for catalog business logic.
//!
//! Services orchestrate repositories, translate absence and reference checks into
//! catalog errors, and log mutations together with the caller identity.
//!
//! - `brand` / `server` - Leaf registries
//! - `association` - Component to server edges and hydration
//! - `catalog` - Component façade over all eight kinds
//! - `lock` - Per-component lock table shared through application state

pub mod association;
pub mod brand;
pub mod catalog;
pub mod lock;
pub mod server;
