//! Data transfer objects exchanged with API callers.
//!
//! Every request and response body lives here. Domain models in `server::model`
//! convert into these at the controller boundary.

pub mod api;
pub mod brand;
pub mod component;
pub mod schema;
pub mod server;
