//! Request-scoped helpers shared by the controllers.
//!
//! - `session` - Typed access to the caller identity stored in the session

pub mod session;
