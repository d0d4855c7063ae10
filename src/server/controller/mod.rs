//! HTTP request handlers.
//!
//! Controllers parse path parameters (including the component kind), read the caller
//! identity from the session, call a service and convert the result to a DTO.

pub mod brand;
pub mod component;
pub mod schema;
pub mod server;
