//! Image fixtures for creating in-memory test data.

use entity::image;

/// Default test image URL.
pub const DEFAULT_URL: &str = "https://cdn.example.com/images/test.png";

/// Creates an image entity model with id `1` and the default URL.
pub fn entity() -> image::Model {
    image::Model {
        id: 1,
        url: DEFAULT_URL.to_string(),
    }
}
