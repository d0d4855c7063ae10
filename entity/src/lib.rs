//! SeaORM entity models for the hardware catalog.
//!
//! Every component kind shares the single `component` table; the kind-specific
//! attributes live in its JSON `attributes` column. Servers are attached to
//! components through the `component_server` edge table.

pub mod prelude;

pub mod brand;
pub mod component;
pub mod component_server;
pub mod image;
pub mod server;
