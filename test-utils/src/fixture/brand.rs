//! Brand fixtures for creating in-memory test data.

use entity::brand;

/// Default test brand name.
pub const DEFAULT_NAME: &str = "Test Brand";

/// Creates a brand entity model with id `1` and the default name.
pub fn entity() -> brand::Model {
    brand::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
    }
}
