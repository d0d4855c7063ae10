mod association;
mod brand;
mod component;
mod server;
