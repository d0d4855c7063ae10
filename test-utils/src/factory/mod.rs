//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let brand = factory::create_brand(&db).await?;
//! let server = factory::create_server(&db).await?;
//! let chassis = factory::create_component(&db, "chassis", brand.id).await?;
//! factory::create_component_server(&db, "chassis", chassis.id, server.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let brand = factory::brand::BrandFactory::new(&db).id(1).name("Dell").build().await?;
//! let chassis = factory::component::ComponentFactory::new(&db, "chassis", brand.id)
//!     .id(3)
//!     .name("ChassisX")
//!     .build()
//!     .await?;
//! ```

pub mod brand;
pub mod component;
pub mod component_server;
pub mod helpers;
pub mod image;
pub mod server;

pub use brand::create_brand;
pub use component::create_component;
pub use component_server::create_component_server;
pub use image::create_image;
pub use server::create_server;
