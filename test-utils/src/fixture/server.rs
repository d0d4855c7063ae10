//! Server fixtures for creating in-memory test data.

use entity::server;

/// Default test server name.
pub const DEFAULT_NAME: &str = "test-server";

/// Creates a server entity model with id `1` and the default name.
pub fn entity() -> server::Model {
    server::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
    }
}
