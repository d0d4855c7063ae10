pub use super::brand::Entity as Brand;
pub use super::component::Entity as Component;
pub use super::component_server::Entity as ComponentServer;
pub use super::image::Entity as Image;
pub use super::server::Entity as Server;
