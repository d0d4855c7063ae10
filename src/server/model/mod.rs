//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Component kinds, their schema
//! descriptors and the typed attribute union also live here since every layer
//! shares them.

pub mod attributes;
pub mod brand;
pub mod component;
pub mod identity;
pub mod image;
pub mod kind;
pub mod schema;
pub mod server;
