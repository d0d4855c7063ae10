//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::lock::ComponentLocks;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ComponentLocks` shares its lock table through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-component locks serializing edge mutations on the same `(kind, id)`.
    ///
    /// Every request must go through this single table, otherwise a delete could race
    /// an attach on the same component.
    pub locks: ComponentLocks,
}

impl AppState {
    /// Creates a new application state around the database pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            locks: ComponentLocks::new(),
        }
    }
}
